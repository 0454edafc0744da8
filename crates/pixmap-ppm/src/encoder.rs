/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::format;
use alloc::vec::Vec;

use pixmap_core::bytestream::{ByteSink, ByteWriter};

use crate::buffer::{Pixel, PixelBuffer};
use crate::errors::PPMEncodeErrors;
use crate::header::PpmFormat;

/// A PPM encoder
///
/// Writes a [`PixelBuffer`] back out as `P6` (the default) or `P3`.
/// Rows are emitted in file order, top scanline first, alpha is dropped
/// and the max value is the buffer's.
///
/// # Example
/// ```
/// use pixmap_core::bytestream::PCursor;
/// use pixmap_ppm::{PPMDecoder, PPMEncoder, Pixel, PixelBuffer};
///
/// let pixels = vec![Pixel::new(1, 2, 3).pack(), Pixel::new(4, 5, 6).pack()];
/// let buffer = PixelBuffer::from_pixels(2, 1, 255, pixels).unwrap();
///
/// let mut out = vec![];
/// PPMEncoder::new(&buffer).encode(&mut out).unwrap();
///
/// let decoded = PPMDecoder::new(PCursor::new(&out)).decode().unwrap();
/// assert_eq!(decoded, buffer);
/// ```
pub struct PPMEncoder<'a> {
    buffer: &'a PixelBuffer,
    format: PpmFormat
}

impl<'a> PPMEncoder<'a> {
    /// Create a new encoder which will write `buffer` as `P6`
    pub fn new(buffer: &'a PixelBuffer) -> PPMEncoder<'a> {
        PPMEncoder {
            buffer,
            format: PpmFormat::Binary
        }
    }
    /// Choose between `P6` and `P3` output
    pub fn set_format(mut self, format: PpmFormat) -> Self {
        self.format = format;
        self
    }

    fn encode_headers<T: ByteSink>(&self, stream: &mut ByteWriter<T>) -> Result<(), PPMEncodeErrors> {
        let (width, height) = self.buffer.dimensions();
        let max_value = self.buffer.max_value();

        let header = format!("\n{width} {height}\n{max_value}\n");

        stream.write_all(self.format.magic())?;
        stream.write_all(header.as_bytes())?;

        Ok(())
    }

    /// Encode into `sink`, returning the number of bytes written
    pub fn encode<T: ByteSink>(&self, sink: T) -> Result<usize, PPMEncodeErrors> {
        let mut stream = ByteWriter::new(sink);

        let width = self.buffer.width();
        let sample_bytes = width * self.buffer.height() * 3;

        stream.reserve(sample_bytes)?;

        self.encode_headers(&mut stream)?;

        let mut row = Vec::with_capacity(width * 3);

        for scanline in self.buffer.scanlines() {
            row.clear();

            match self.format {
                PpmFormat::Binary => {
                    for word in scanline {
                        let Pixel { r, g, b } = Pixel::unpack(*word);
                        row.extend_from_slice(&[r, g, b]);
                    }
                }
                PpmFormat::Ascii => {
                    for (i, word) in scanline.iter().enumerate() {
                        let Pixel { r, g, b } = Pixel::unpack(*word);

                        if i != 0 {
                            row.push(b' ');
                        }
                        push_decimal(&mut row, r);
                        row.push(b' ');
                        push_decimal(&mut row, g);
                        row.push(b' ');
                        push_decimal(&mut row, b);
                    }
                    row.push(b'\n');
                }
            }
            stream.write_all(&row)?;
        }
        stream.flush()?;

        Ok(stream.bytes_written())
    }
}

fn push_decimal(out: &mut Vec<u8>, value: u8) {
    if value >= 100 {
        out.push(b'0' + value / 100);
    }
    if value >= 10 {
        out.push(b'0' + (value / 10) % 10);
    }
    out.push(b'0' + value % 10);
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use crate::buffer::{Pixel, PixelBuffer};
    use crate::encoder::{push_decimal, PPMEncoder};
    use crate::header::PpmFormat;

    fn two_rows() -> PixelBuffer {
        // bottom row first
        let pixels = vec![Pixel::new(7, 8, 9).pack(), Pixel::new(1, 20, 255).pack()];
        PixelBuffer::from_pixels(1, 2, 255, pixels).unwrap()
    }

    #[test]
    fn binary_output_is_top_row_first() {
        let mut out = vec![];
        let written = PPMEncoder::new(&two_rows()).encode(&mut out).unwrap();

        assert_eq!(out, b"P6\n1 2\n255\n\x01\x14\xff\x07\x08\x09");
        assert_eq!(written, out.len());
    }

    #[test]
    fn ascii_output() {
        let mut out = vec![];
        PPMEncoder::new(&two_rows())
            .set_format(PpmFormat::Ascii)
            .encode(&mut out)
            .unwrap();

        assert_eq!(out, b"P3\n1 2\n255\n1 20 255\n7 8 9\n");
    }

    #[test]
    fn decimal_digits() {
        let mut out = vec![];
        for value in [0, 9, 10, 99, 100, 255] {
            push_decimal(&mut out, value);
            out.push(b',');
        }
        assert_eq!(out, b"0,9,10,99,100,255,");
    }
}
