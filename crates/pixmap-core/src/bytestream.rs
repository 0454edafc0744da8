/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Byte sources and sinks used by the pixmap decoders and encoders
//!
//! Decoders pull bytes through [`ByteReader`], which wraps anything that implements
//! [`ByteSource`]. Encoders push bytes through [`ByteWriter`], which wraps anything
//! that implements [`ByteSink`].
pub use reader::cursor::PCursor;
pub use reader::{ByteIoError, ByteReader};
pub use traits::*;
pub use writer::ByteWriter;

mod reader;
mod traits;
mod writer;
