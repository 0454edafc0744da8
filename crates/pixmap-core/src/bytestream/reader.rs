/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::Formatter;

pub(crate) mod cursor;
mod std_readers;

use crate::bytestream::ByteSource;

pub enum ByteIoError {
    #[cfg(feature = "std")]
    StdIoError(std::io::Error),
    /// A sink could not grow to hold the requested number of bytes
    ReserveFailed(usize)
}

impl core::fmt::Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            ByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {}", err)
            }
            ByteIoError::ReserveFailed(size) => {
                writeln!(f, "Could not reserve space for {size} bytes")
            }
        }
    }
}

impl core::fmt::Display for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ByteIoError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for ByteIoError {
    fn from(value: std::io::Error) -> Self {
        ByteIoError::StdIoError(value)
    }
}

/// A forward-only reader over a [`ByteSource`]
///
/// Keeps track of how many bytes were handed out so decoders
/// can report where in the stream something went wrong.
pub struct ByteReader<T: ByteSource> {
    inner:    T,
    position: u64
}

impl<T: ByteSource> ByteReader<T> {
    pub fn new(source: T) -> ByteReader<T> {
        ByteReader {
            inner:    source,
            position: 0
        }
    }
    /// Destroy this reader returning
    /// the underlying source of the bytes
    /// from which we were decoding
    #[inline(always)]
    pub fn consume(self) -> T {
        self.inner
    }

    /// Return the next byte or `None` once the source is exhausted
    #[inline(always)]
    pub fn next_byte(&mut self) -> Result<Option<u8>, ByteIoError> {
        let byte = self.inner.read_byte()?;

        if byte.is_some() {
            self.position += 1;
        }
        Ok(byte)
    }

    /// Fill as much of `buf` as the source allows.
    ///
    /// Returns fewer bytes than `buf.len()` only when the source ran out.
    pub fn read_up_to(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        let mut filled = 0;

        while filled < buf.len() {
            let read = self.inner.read_bytes(&mut buf[filled..])?;

            if read == 0 {
                break;
            }
            filled += read;
        }
        self.position += filled as u64;

        Ok(filled)
    }

    /// Discard bytes up to and including the next `\n`.
    ///
    /// Returns `false` if the source ended before a newline was found.
    pub fn skip_line(&mut self) -> Result<bool, ByteIoError> {
        while let Some(byte) = self.next_byte()? {
            if byte == b'\n' {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Number of bytes consumed from the source so far
    #[inline(always)]
    pub const fn position(&self) -> u64 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use crate::bytestream::{ByteReader, PCursor};

    #[test]
    fn next_byte_tracks_position() {
        let mut reader = ByteReader::new(PCursor::new(b"P6"));

        assert_eq!(reader.next_byte().unwrap(), Some(b'P'));
        assert_eq!(reader.next_byte().unwrap(), Some(b'6'));
        assert_eq!(reader.next_byte().unwrap(), None);
        assert_eq!(reader.position(), 2);
    }

    #[test]
    fn skip_line_consumes_newline() {
        let mut reader = ByteReader::new(PCursor::new(b"# a comment\n42"));

        assert!(reader.skip_line().unwrap());
        assert_eq!(reader.next_byte().unwrap(), Some(b'4'));
    }

    #[test]
    fn skip_line_reports_unterminated_comment() {
        let mut reader = ByteReader::new(PCursor::new(b"# never ends"));

        assert!(!reader.skip_line().unwrap());
        assert_eq!(reader.next_byte().unwrap(), None);
    }

    #[test]
    fn read_up_to_stops_at_end() {
        let mut reader = ByteReader::new(PCursor::new([1_u8, 2, 3]));
        let mut buf = [0; 5];

        assert_eq!(reader.read_up_to(&mut buf).unwrap(), 3);
        assert_eq!(&buf[..3], &[1, 2, 3]);
        assert_eq!(reader.position(), 3);
    }
}
