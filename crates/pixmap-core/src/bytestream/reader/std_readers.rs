/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "std")]

use std::io::{BufRead, BufReader, Cursor, ErrorKind, Read};

use crate::bytestream::{ByteIoError, ByteSource};

// Interrupted reads are retried, every other error is passed on

fn read_byte_buffered<B: BufRead>(source: &mut B) -> Result<Option<u8>, ByteIoError> {
    loop {
        match source.fill_buf() {
            Ok(buf) => {
                let byte = buf.first().copied();

                if byte.is_some() {
                    source.consume(1);
                }
                return Ok(byte);
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(ByteIoError::from(e))
        }
    }
}

fn read_bytes_retrying<R: Read>(source: &mut R, buf: &mut [u8]) -> Result<usize, ByteIoError> {
    loop {
        match source.read(buf) {
            Ok(read) => return Ok(read),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(ByteIoError::from(e))
        }
    }
}

impl<R: Read> ByteSource for BufReader<R> {
    #[inline]
    fn read_byte(&mut self) -> Result<Option<u8>, ByteIoError> {
        read_byte_buffered(self)
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        read_bytes_retrying(self, buf)
    }
}

impl<T: AsRef<[u8]>> ByteSource for Cursor<T> {
    #[inline]
    fn read_byte(&mut self) -> Result<Option<u8>, ByteIoError> {
        read_byte_buffered(self)
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        read_bytes_retrying(self, buf)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufReader, ErrorKind, Read};

    use crate::bytestream::{ByteIoError, ByteReader};

    /// Fails every other call with `Interrupted`, one byte per successful read
    struct Stuttering<'a> {
        data:        &'a [u8],
        interrupted: bool
    }

    impl Read for Stuttering<'_> {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            self.interrupted = !self.interrupted;

            if self.interrupted {
                return Err(ErrorKind::Interrupted.into());
            }
            if self.data.is_empty() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.data[0];
            self.data = &self.data[1..];
            Ok(1)
        }
    }

    #[test]
    fn interrupted_reads_are_retried() {
        let source = Stuttering {
            data:        b"P6\x01\x02\x03",
            interrupted: false
        };
        let mut reader = ByteReader::new(BufReader::with_capacity(1, source));
        let mut rest = [0; 4];

        assert_eq!(reader.next_byte().unwrap(), Some(b'P'));
        assert_eq!(reader.next_byte().unwrap(), Some(b'6'));
        assert_eq!(reader.read_up_to(&mut rest).unwrap(), 3);
        assert_eq!(&rest[..3], &[1, 2, 3]);
    }

    #[test]
    fn hard_errors_are_reported() {
        struct Broken;

        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(ErrorKind::BrokenPipe.into())
            }
        }
        let mut reader = ByteReader::new(BufReader::new(Broken));

        assert!(matches!(
            reader.next_byte(),
            Err(ByteIoError::StdIoError(e)) if e.kind() == ErrorKind::BrokenPipe
        ));
    }
}
