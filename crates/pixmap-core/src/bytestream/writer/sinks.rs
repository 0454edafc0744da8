/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::{ByteIoError, ByteSink};

impl ByteSink for &mut alloc::vec::Vec<u8> {
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        self.extend_from_slice(buf);
        Ok(())
    }

    fn flush_bytes(&mut self) -> Result<(), ByteIoError> {
        // no-op
        Ok(())
    }

    fn reserve_capacity(&mut self, size: usize) -> Result<(), ByteIoError> {
        self.try_reserve(size)
            .map_err(|_| ByteIoError::ReserveFailed(size))
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> ByteSink for &mut std::io::BufWriter<W> {
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        use std::io::Write;

        self.write_all(buf).map_err(ByteIoError::StdIoError)
    }

    fn flush_bytes(&mut self) -> Result<(), ByteIoError> {
        use std::io::Write;

        self.flush().map_err(ByteIoError::StdIoError)
    }

    fn reserve_capacity(&mut self, _: usize) -> Result<(), ByteIoError> {
        Ok(())
    }
}
