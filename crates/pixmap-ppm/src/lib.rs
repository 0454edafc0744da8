/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A Portable Pixmap decoder and encoder
//!
//! Supports the two RGB members of the netpbm family:
//! ```text
//! ╔═══════╤════════════════════════════════════════════════════════════╗
//! ║ Magic │ Layout                                                     ║
//! ╠═══════╪════════════════════════════════════════════════════════════╣
//! ║ P3    │ header, then whitespace separated decimal samples          ║
//! ╟───────┼────────────────────────────────────────────────────────────╢
//! ║ P6    │ header, then one raw byte per sample                       ║
//! ╚═══════╧════════════════════════════════════════════════════════════╝
//! ```
//! The header is the magic, then width, height and max value as decimal
//! numbers separated by spaces or newlines, with `#` comments running to the
//! end of their line. A single whitespace byte separates it from the samples,
//! which are `r g b` triples in row-major order.
//!
//! Decoded pixels are packed one per `u32` with alpha set to 255, and the rows
//! are stored bottom to top, see [`PixelBuffer`].
//!
//! # Example
//! ```
//! use pixmap_core::bytestream::PCursor;
//! use pixmap_ppm::{PPMDecoder, Pixel};
//!
//! let image = b"P3\n# a 2x1 image\n2 1\n255\n255 0 0  0 0 255\n";
//! let buffer = PPMDecoder::new(PCursor::new(image)).decode().unwrap();
//!
//! assert_eq!(buffer.dimensions(), (2, 1));
//! assert_eq!(buffer.pixel_at(1, 0), Some(Pixel::new(0, 0, 255)));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub use buffer::*;
pub use decoder::*;
pub use encoder::*;
pub use errors::*;
pub use header::{PpmFormat, PpmHeader, MAX_SUPPORTED_MAX_VALUE, MAX_TOKEN_DIGITS};
pub use pixmap_core;

mod buffer;
mod decoder;
mod encoder;
mod errors;
mod header;
mod packer;
mod reader;
