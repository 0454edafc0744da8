/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during decoding and encoding.
use core::fmt::{Debug, Display, Formatter};

use pixmap_core::bytestream::ByteIoError;

/// Possible Errors that may occur during decoding
///
/// Every error aborts the decode, no partially decoded
/// pixels are returned alongside it.
pub enum PPMDecodeErrors {
    /// The first byte is not `P`
    ///
    /// Contains the byte found, or `None` if the stream was empty
    InvalidMagic(Option<u8>),
    /// The second byte is not `3` or `6`
    ///
    /// Grayscale and bitmap members of the family (`P1`, `P2`, `P4`, `P5`)
    /// end up here
    UnsupportedVariant(Option<u8>),
    /// A decimal token is longer than the allowed number of digits
    ///
    /// The argument is the digit limit
    NumberTooLong(usize),
    /// The stream ended before width, height and max value were all read
    ///
    /// The argument is the number of header fields that were read
    HeaderIncomplete(usize),
    /// A header field has a value the decoder refuses
    ///
    /// Raised in strict mode for zero tokens, and for values too large to
    /// represent on this platform
    InvalidHeaderValue(&'static str),
    /// Too large dimensions
    ///
    /// # Arguments
    /// - 1st argument is the configured limit
    /// - 2nd argument is the value found in the header
    LargeDimensions(usize, usize),
    /// The max value is above 255, 16 bit channels are not supported
    UnsupportedMaxValue(usize),
    /// A channel sample is greater than the header's max value
    ///
    /// # Arguments
    /// - 1st argument is the sample
    /// - 2nd argument is the max value
    PixelValueOutOfRange(u64, usize),
    /// The stream ended before every pixel was read
    ///
    /// # Arguments
    /// - 1st argument is the number of pixels expected
    /// - 2nd argument is number of pixels actually read
    IncompleteImageData(usize, usize),
    /// The pixel buffer for this many pixels could not be allocated
    AllocationFailure(usize),
    /// The underlying reader failed
    IoErrors(ByteIoError)
}

impl Debug for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidMagic(Some(byte)) => {
                writeln!(
                    f,
                    "Expected P as first PPM byte but got '{}'",
                    char::from(*byte)
                )
            }
            Self::InvalidMagic(None) => {
                writeln!(f, "Expected P as first PPM byte but the stream is empty")
            }
            Self::UnsupportedVariant(Some(byte)) => {
                writeln!(
                    f,
                    "Unsupported PPM version `{}`, supported versions are 3 and 6",
                    char::from(*byte)
                )
            }
            Self::UnsupportedVariant(None) => {
                writeln!(f, "Stream ended before the PPM version byte")
            }
            Self::NumberTooLong(limit) => {
                writeln!(f, "Number longer than the allowed {limit} digits")
            }
            Self::HeaderIncomplete(fields) => {
                writeln!(
                    f,
                    "Stream ended after reading {fields} of 3 header fields (width, height, max value)"
                )
            }
            Self::InvalidHeaderValue(field) => {
                writeln!(f, "Invalid header, reason: unusable value for {field}")
            }
            Self::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            Self::UnsupportedMaxValue(value) => {
                writeln!(
                    f,
                    "Max value {value} greater than 255, 16 bit images are not supported"
                )
            }
            Self::PixelValueOutOfRange(value, max) => {
                writeln!(f, "Pixel value {value} greater than max value {max}")
            }
            Self::IncompleteImageData(expected, found) => {
                writeln!(
                    f,
                    "Incomplete image data, expected {expected} pixels but stream ended after {found}"
                )
            }
            Self::AllocationFailure(size) => {
                writeln!(f, "Could not allocate a buffer of {size} pixels")
            }
            Self::IoErrors(err) => {
                writeln!(f, "I/O error {:?}", err)
            }
        }
    }
}

impl Display for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PPMDecodeErrors {}

impl From<ByteIoError> for PPMDecodeErrors {
    fn from(value: ByteIoError) -> Self {
        PPMDecodeErrors::IoErrors(value)
    }
}

/// Errors occurring during encoding
pub enum PPMEncodeErrors {
    IoErrors(ByteIoError)
}

impl Debug for PPMEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PPMEncodeErrors::IoErrors(err) => {
                writeln!(f, "I/O error {:?}", err)
            }
        }
    }
}

impl Display for PPMEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PPMEncodeErrors {}

impl From<ByteIoError> for PPMEncodeErrors {
    fn from(value: ByteIoError) -> Self {
        PPMEncodeErrors::IoErrors(value)
    }
}
