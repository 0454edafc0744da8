/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Traits for reading and writing images in pixmap
//!
//! This exposes the traits implemented by byte sources and sinks, the
//! decoders and encoders are generic over them.

use crate::bytestream::reader::ByteIoError;

/// A forward-only source of raw bytes.
///
/// The source is never rewound, decoders only ever ask for the next byte
/// or a run of next bytes.
///
/// The trait is implemented for [`PCursor`](crate::bytestream::PCursor), for
/// `BufReader` and `Cursor` when the `std` feature is enabled, and for
/// `&mut S` of any source so the caller can keep ownership of it.
pub trait ByteSource {
    /// Read the next byte from the source
    ///
    /// ## Returns
    ///  - `Ok(Some(byte))` - The next byte
    ///  - `Ok(None)` - The source is exhausted
    ///  - `Err()` - The underlying reader failed for a reason other than reaching its end
    fn read_byte(&mut self) -> Result<Option<u8>, ByteIoError>;

    /// Read bytes into `buf` returning how many bytes were read.
    ///
    /// A return of `0` with a non-empty buffer means the source is exhausted.
    /// This doesn't guarantee that `buf` will be filled.
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    #[inline(always)]
    fn read_byte(&mut self) -> Result<Option<u8>, ByteIoError> {
        (**self).read_byte()
    }

    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        (**self).read_bytes(buf)
    }
}

/// The writer trait implemented for the pixmap encoders
///
/// Anything that implements this trait can be used as a sink
/// for writing encoded images
pub trait ByteSink {
    /// Write all bytes to the sink or return an error if something occurred
    ///
    /// This will always write all bytes, if it can't fully write all bytes, it will
    /// error out
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ByteIoError>;
    /// Ensure bytes are written to the sink.
    fn flush_bytes(&mut self) -> Result<(), ByteIoError>;
    /// A hint to tell the implementation how big of a size we expect the image to be
    ///
    /// This is just a hint, akin to calling `Vec::reserve` and should be treated as such.
    /// Sinks that cannot make use of it return `Ok(())`
    fn reserve_capacity(&mut self, size: usize) -> Result<(), ByteIoError>;
}
