/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the pixmap crates
//!
//! It currently contains
//!
//! - A forward-only byte source abstraction with in-memory and `std` readers
//! - A byte sink abstraction used by encoders
//! - Decoder options shared by decoders
//! - Logging macros that compile to nothing when the `log` feature is off
//!
//! This library is `#[no_std]` with `alloc` needed for `Vec`.
//!
//! # Features
//!  - `std`: Implements the byte traits for `std::io` readers and writers.
//!
//!  - `log`: Routes the logging macros to the [log](https://docs.rs/log) crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod bytestream;
#[cfg(not(feature = "log"))]
pub mod log;
pub mod options;

#[cfg(feature = "log")]
pub use log;
