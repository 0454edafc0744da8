/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

mod sinks;

use crate::bytestream::{ByteIoError, ByteSink};

/// Encapsulates a simple byte writer over a [`ByteSink`]
/// that counts what it has written
pub struct ByteWriter<T: ByteSink> {
    inner:         T,
    bytes_written: usize
}

impl<T: ByteSink> ByteWriter<T> {
    /// Create a new writer for the sink
    pub fn new(sink: T) -> ByteWriter<T> {
        ByteWriter {
            inner:         sink,
            bytes_written: 0
        }
    }
    /// Write all of `buf` to the sink or error out
    #[inline]
    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        self.inner.write_all_bytes(buf)?;
        self.bytes_written += buf.len();
        Ok(())
    }
    /// Hint the sink about how many bytes are coming
    pub fn reserve(&mut self, additional: usize) -> Result<(), ByteIoError> {
        self.inner.reserve_capacity(additional)
    }

    pub fn flush(&mut self) -> Result<(), ByteIoError> {
        self.inner.flush_bytes()
    }
    /// Return the number of bytes the writer has written
    pub const fn bytes_written(&self) -> usize {
        self.bytes_written
    }
}
