/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::{ByteIoError, ByteSource};

/// An in-memory byte source
///
/// Prefer this over `std::io::Cursor` for data already in memory, reads
/// index straight into the slice without going through `std::io`.
///
/// # Example
/// ```
/// use pixmap_core::bytestream::{ByteSource, PCursor};
///
/// let mut cursor = PCursor::new(b"P3");
/// assert_eq!(cursor.read_byte().unwrap(), Some(b'P'));
/// assert_eq!(cursor.position(), 1);
/// ```
pub struct PCursor<T: AsRef<[u8]>> {
    stream:   T,
    position: usize
}

impl<T: AsRef<[u8]>> PCursor<T> {
    pub fn new(buffer: T) -> PCursor<T> {
        PCursor {
            stream:   buffer,
            position: 0
        }
    }
    /// Current offset into the buffer
    pub const fn position(&self) -> usize {
        self.position
    }
    /// Bytes not yet read
    pub fn remaining(&self) -> usize {
        self.stream.as_ref().len().saturating_sub(self.position)
    }
}

impl<T: AsRef<[u8]>> ByteSource for PCursor<T> {
    #[inline(always)]
    fn read_byte(&mut self) -> Result<Option<u8>, ByteIoError> {
        let byte = self.stream.as_ref().get(self.position).copied();

        if byte.is_some() {
            self.position += 1;
        }
        Ok(byte)
    }

    #[inline]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        let data = self.stream.as_ref();
        let start = self.position.min(data.len());
        let amount = buf.len().min(data.len() - start);

        buf[..amount].copy_from_slice(&data[start..start + amount]);
        self.position = start + amount;

        Ok(amount)
    }
}
