/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel stream readers, one per PPM variant
use alloc::vec;
use alloc::vec::Vec;

use pixmap_core::bytestream::{ByteReader, ByteSource};

use crate::buffer::Pixel;
use crate::errors::PPMDecodeErrors;
use crate::header::{PpmFormat, PpmHeader, TokenAccumulator};

/// Upper bound on how many raw bytes the binary reader pulls per refill
const BINARY_CHUNK_SIZE: usize = 1 << 16;

/// Reads `P3` samples, decimal tokens split by any non digit byte
pub(crate) struct AsciiReader {
    token: TokenAccumulator
}

impl AsciiReader {
    pub fn new() -> AsciiReader {
        AsciiReader {
            token: TokenAccumulator::default()
        }
    }

    fn next_component<T: ByteSource>(
        &mut self, reader: &mut ByteReader<T>, max_value: usize
    ) -> Result<Option<u8>, PPMDecodeErrors> {
        loop {
            match reader.next_byte()? {
                Some(digit @ b'0'..=b'9') => self.token.push_digit(digit)?,
                // any other byte, or the end of the stream, ends a pending sample
                _ if !self.token.is_empty() => {
                    return check_component(self.token.take(), max_value).map(Some);
                }
                Some(_) => {}
                None => return Ok(None)
            }
        }
    }
}

/// Reads `P6` samples, one byte per channel
pub(crate) struct BinaryReader {
    chunk:     Vec<u8>,
    position:  usize,
    end:       usize,
    remaining: usize
}

impl BinaryReader {
    /// `expected` is the number of sample bytes the image holds,
    /// nothing past them is pulled from the source.
    pub fn new(expected: usize) -> BinaryReader {
        BinaryReader {
            chunk:     vec![0; expected.clamp(1, BINARY_CHUNK_SIZE)],
            position:  0,
            end:       0,
            remaining: expected
        }
    }

    fn next_component<T: ByteSource>(
        &mut self, reader: &mut ByteReader<T>, max_value: usize
    ) -> Result<Option<u8>, PPMDecodeErrors> {
        if self.position == self.end {
            let wanted = self.remaining.min(self.chunk.len());

            self.end = reader.read_up_to(&mut self.chunk[..wanted])?;
            self.position = 0;
            self.remaining -= self.end;

            if self.end == 0 {
                return Ok(None);
            }
        }
        let byte = self.chunk[self.position];
        self.position += 1;

        check_component(u64::from(byte), max_value).map(Some)
    }
}

/// The pixel stage, picked once from the header format
pub(crate) enum PixelStreamReader {
    Ascii(AsciiReader),
    Binary(BinaryReader)
}

impl PixelStreamReader {
    pub fn for_header(header: &PpmHeader) -> PixelStreamReader {
        match header.format {
            PpmFormat::Ascii => PixelStreamReader::Ascii(AsciiReader::new()),
            PpmFormat::Binary => {
                let expected = header
                    .width
                    .saturating_mul(header.height)
                    .saturating_mul(3);
                PixelStreamReader::Binary(BinaryReader::new(expected))
            }
        }
    }

    fn next_component<T: ByteSource>(
        &mut self, reader: &mut ByteReader<T>, max_value: usize
    ) -> Result<Option<u8>, PPMDecodeErrors> {
        match self {
            PixelStreamReader::Ascii(ascii) => ascii.next_component(reader, max_value),
            PixelStreamReader::Binary(binary) => binary.next_component(reader, max_value)
        }
    }

    /// Group the next three samples into a pixel, in r, g, b order.
    ///
    /// Returns `Ok(None)` if the stream ends before a full triple was read.
    pub fn next_pixel<T: ByteSource>(
        &mut self, reader: &mut ByteReader<T>, max_value: usize
    ) -> Result<Option<Pixel>, PPMDecodeErrors> {
        let mut channels = [0_u8; 3];

        for channel in channels.iter_mut() {
            match self.next_component(reader, max_value)? {
                Some(value) => *channel = value,
                None => return Ok(None)
            }
        }
        let [r, g, b] = channels;

        Ok(Some(Pixel::new(r, g, b)))
    }
}

#[inline(always)]
fn check_component(value: u64, max_value: usize) -> Result<u8, PPMDecodeErrors> {
    if value > max_value as u64 {
        return Err(PPMDecodeErrors::PixelValueOutOfRange(value, max_value));
    }
    // max value is at most 255
    Ok(value as u8)
}
