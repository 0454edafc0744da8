/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pixmap_core::bytestream::{ByteReader, ByteSource};
use pixmap_core::log::{error, trace};
use pixmap_core::options::DecoderOptions;

use crate::buffer::{allocate_pixels, PixelBuffer};
use crate::errors::PPMDecodeErrors;
use crate::header::{read_header, PpmFormat, PpmHeader};
use crate::packer::PixelPacker;
use crate::reader::PixelStreamReader;

/// An instance of a PPM decoder
///
/// The decoder can decode `P3` (ASCII) and `P6` (binary) images with at most
/// 8 bits per channel. Pixels come out packed as `0xAABBGGRR` words with alpha
/// forced to 255, stored bottom row first, see [`PixelBuffer`].
///
/// The decoder reads its source strictly forward and never closes it, pass
/// `&mut source` to keep using the source afterwards.
pub struct PPMDecoder<T: ByteSource> {
    reader:  ByteReader<T>,
    header:  Option<PpmHeader>,
    options: DecoderOptions
}

impl<T: ByteSource> PPMDecoder<T> {
    /// Create a new ppm decoder with default options
    ///
    /// # Arguments
    /// - data: PPM encoded pixels
    ///
    /// # Example
    /// ```
    /// use pixmap_core::bytestream::PCursor;
    /// use pixmap_ppm::PPMDecoder;
    /// let mut decoder = PPMDecoder::new(PCursor::new(b"NOT VALID PPM"));
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: T) -> PPMDecoder<T> {
        PPMDecoder::new_with_options(data, DecoderOptions::default())
    }
    /// Create a new PPM decoder with the specified options
    ///
    /// # Arguments
    /// - data: PPM encoded data.
    /// - options: Modified options for the decoder
    /// # Example
    /// ```
    /// use pixmap_core::bytestream::PCursor;
    /// use pixmap_core::options::DecoderOptions;
    /// use pixmap_ppm::PPMDecoder;
    ///
    /// let options = DecoderOptions::default().set_max_width(1);
    /// let mut decoder = PPMDecoder::new_with_options(PCursor::new(b"P6\n2 1\n255\n"), options);
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new_with_options(data: T, options: DecoderOptions) -> PPMDecoder<T> {
        PPMDecoder {
            reader: ByteReader::new(data),
            header: None,
            options
        }
    }

    /// Read PPM headers and store them in internal state
    ///
    /// Calling it again after a successful call does nothing.
    pub fn decode_headers(&mut self) -> Result<(), PPMDecodeErrors> {
        self.header_or_decode().map(|_| ())
    }

    fn header_or_decode(&mut self) -> Result<PpmHeader, PPMDecodeErrors> {
        if let Some(header) = self.header {
            return Ok(header);
        }
        let header = read_header(&mut self.reader, &self.options).inspect_err(|e| {
            error!("Could not decode PPM header: {:?}", e);
        })?;
        self.header = Some(header);

        Ok(header)
    }

    /// Return the header or none if headers aren't decoded
    pub const fn header(&self) -> Option<PpmHeader> {
        self.header
    }

    /// Return image dimensions or none if headers aren't decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        match self.header {
            Some(header) => Some((header.width, header.height)),
            None => None
        }
    }

    /// Return the header's max value or none if headers aren't decoded
    pub const fn max_value(&self) -> Option<usize> {
        match self.header {
            Some(header) => Some(header.max_value),
            None => None
        }
    }

    /// Return the PPM variant or none if headers aren't decoded
    pub const fn format(&self) -> Option<PpmFormat> {
        match self.header {
            Some(header) => Some(header.format),
            None => None
        }
    }

    /// Decode the image, reading headers first if that hasn't happened yet
    ///
    /// On error nothing is returned, the partially filled buffer is dropped.
    pub fn decode(&mut self) -> Result<PixelBuffer, PPMDecodeErrors> {
        let header = self.header_or_decode()?;

        self.decode_pixels(header).inspect_err(|e| {
            error!("Could not decode PPM pixels: {:?}", e);
        })
    }

    fn decode_pixels(&mut self, header: PpmHeader) -> Result<PixelBuffer, PPMDecodeErrors> {
        let pixels = allocate_pixels(header.width, header.height)?;
        let expected = pixels.len();

        trace!("Allocated {} pixels", expected);

        let mut packer = PixelPacker::new(pixels, header.width, header.height);
        let mut stream = PixelStreamReader::for_header(&header);

        while !packer.is_complete() {
            match stream.next_pixel(&mut self.reader, header.max_value)? {
                Some(pixel) => packer.push(pixel),
                None => {
                    return Err(PPMDecodeErrors::IncompleteImageData(
                        expected,
                        packer.written()
                    ));
                }
            }
        }
        trace!("Consumed {} bytes", self.reader.position());

        Ok(PixelBuffer::new_unchecked(
            header.width,
            header.height,
            header.max_value,
            packer.finish()
        ))
    }

    /// Destroy the decoder returning the byte source
    pub fn into_inner(self) -> T {
        self.reader.consume()
    }
}
