/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Display, Formatter};

use pixmap_core::bytestream::{ByteReader, ByteSource};
use pixmap_core::log::{info, trace};
use pixmap_core::options::DecoderOptions;

use crate::errors::PPMDecodeErrors;

/// Maximum number of decimal digits in a single token,
/// header field or ASCII sample alike
pub const MAX_TOKEN_DIGITS: usize = 10;

/// Largest max value the decoder accepts, channels are one byte wide
pub const MAX_SUPPORTED_MAX_VALUE: usize = 255;

const HEADER_FIELDS: [&str; 3] = ["width", "height", "max value"];

/// The two PPM variants understood by the decoder
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PpmFormat {
    /// `P3`, samples are whitespace separated decimal numbers
    Ascii,
    /// `P6`, samples are raw bytes
    Binary
}

impl PpmFormat {
    /// Map the second magic byte to a format
    pub const fn from_version(version: u8) -> Option<PpmFormat> {
        match version {
            b'3' => Some(PpmFormat::Ascii),
            b'6' => Some(PpmFormat::Binary),
            _ => None
        }
    }
    /// The magic bytes that start a file of this format
    pub const fn magic(self) -> &'static [u8; 2] {
        match self {
            PpmFormat::Ascii => b"P3",
            PpmFormat::Binary => b"P6"
        }
    }
}

impl Display for PpmFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Ascii => write!(f, "P3"),
            Self::Binary => write!(f, "P6")
        }
    }
}

/// Information read from a PPM header
///
/// All numeric fields are non-zero once produced by the decoder.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PpmHeader {
    pub format:    PpmFormat,
    pub width:     usize,
    pub height:    usize,
    pub max_value: usize
}

/// A decimal number being read digit by digit, capped at [`MAX_TOKEN_DIGITS`].
#[derive(Default)]
pub(crate) struct TokenAccumulator {
    value:  u64,
    digits: usize
}

impl TokenAccumulator {
    pub const fn is_empty(&self) -> bool {
        self.digits == 0
    }

    pub const fn value(&self) -> u64 {
        self.value
    }

    pub fn push_digit(&mut self, digit: u8) -> Result<(), PPMDecodeErrors> {
        if self.digits == MAX_TOKEN_DIGITS {
            return Err(PPMDecodeErrors::NumberTooLong(MAX_TOKEN_DIGITS));
        }
        // ten digits top out below 10^10, no overflow in u64
        self.value = self.value * 10 + u64::from(digit - b'0');
        self.digits += 1;
        Ok(())
    }

    /// Return the accumulated value and start a new token
    pub fn take(&mut self) -> u64 {
        let value = self.value;
        *self = TokenAccumulator::default();
        value
    }
}

/// Read the magic bytes and the three header fields.
///
/// On success the reader sits right after the single whitespace byte
/// that ended the max value, i.e. on the first byte of pixel data.
pub(crate) fn read_header<T: ByteSource>(
    reader: &mut ByteReader<T>, options: &DecoderOptions
) -> Result<PpmHeader, PPMDecodeErrors> {
    let p = reader.next_byte()?;

    if p != Some(b'P') {
        return Err(PPMDecodeErrors::InvalidMagic(p));
    }
    let version = reader.next_byte()?;

    let format = version
        .and_then(PpmFormat::from_version)
        .ok_or(PPMDecodeErrors::UnsupportedVariant(version))?;

    info!("Format: {}", format);

    let mut fields = [0_usize; 3];
    let mut filled = 0;
    let mut token = TokenAccumulator::default();

    while filled < fields.len() {
        let Some(byte) = reader.next_byte()? else {
            return Err(PPMDecodeErrors::HeaderIncomplete(filled));
        };

        match byte {
            b'#' => {
                // an unterminated comment runs into end of stream,
                // which the next read reports
                reader.skip_line()?;
            }
            b' ' | b'\n' => {
                if token.is_empty() {
                    continue;
                }
                if token.value() == 0 {
                    if options.strict_mode() {
                        return Err(PPMDecodeErrors::InvalidHeaderValue(HEADER_FIELDS[filled]));
                    }
                    // zero tokens fill nothing and their digits stay in the accumulator
                    trace!("Skipping zero token for {}", HEADER_FIELDS[filled]);
                    continue;
                }
                fields[filled] = usize::try_from(token.take())
                    .map_err(|_| PPMDecodeErrors::InvalidHeaderValue(HEADER_FIELDS[filled]))?;
                filled += 1;
            }
            b'0'..=b'9' => token.push_digit(byte)?,
            _ => {}
        }
    }
    let [width, height, max_value] = fields;

    info!("Width: {}, height: {}", width, height);
    info!("Max value: {}", max_value);

    if width > options.max_width() {
        return Err(PPMDecodeErrors::LargeDimensions(options.max_width(), width));
    }
    if height > options.max_height() {
        return Err(PPMDecodeErrors::LargeDimensions(
            options.max_height(),
            height
        ));
    }
    if max_value > MAX_SUPPORTED_MAX_VALUE {
        return Err(PPMDecodeErrors::UnsupportedMaxValue(max_value));
    }

    Ok(PpmHeader {
        format,
        width,
        height,
        max_value
    })
}

#[cfg(test)]
mod tests {
    use pixmap_core::bytestream::{ByteReader, PCursor};
    use pixmap_core::options::DecoderOptions;

    use crate::errors::PPMDecodeErrors;
    use crate::header::{read_header, PpmFormat, PpmHeader, TokenAccumulator, MAX_TOKEN_DIGITS};

    fn header(data: &[u8]) -> Result<PpmHeader, PPMDecodeErrors> {
        read_header(&mut ByteReader::new(PCursor::new(data)), &DecoderOptions::default())
    }

    #[test]
    fn reads_plain_header() {
        let header = header(b"P6\n3 2\n255\n").unwrap();

        assert_eq!(header.format, PpmFormat::Binary);
        assert_eq!((header.width, header.height, header.max_value), (3, 2, 255));
    }

    #[test]
    fn stops_after_separator_byte() {
        let mut reader = ByteReader::new(PCursor::new(b"P3 1 1 15\n7"));
        read_header(&mut reader, &DecoderOptions::default()).unwrap();

        assert_eq!(reader.next_byte().unwrap(), Some(b'7'));
    }

    #[test]
    fn comments_anywhere_in_header() {
        let header =
            header(b"P3# right after magic\n# own line\n4 # trailing\n5\n#between\n100\n").unwrap();

        assert_eq!(header.format, PpmFormat::Ascii);
        assert_eq!((header.width, header.height, header.max_value), (4, 5, 100));
    }

    #[test]
    fn unknown_bytes_are_ignored() {
        // tab and carriage return are neither separators nor errors
        let header = header(b"P6\r\n1\t2 3 255\r\n").unwrap();

        assert_eq!((header.width, header.height, header.max_value), (12, 3, 255));
    }

    #[test]
    fn rejects_bad_magic() {
        assert!(matches!(
            header(b"Q6\n1 1\n255\n"),
            Err(PPMDecodeErrors::InvalidMagic(Some(b'Q')))
        ));
        assert!(matches!(
            header(b""),
            Err(PPMDecodeErrors::InvalidMagic(None))
        ));
    }

    #[test]
    fn rejects_other_netpbm_variants() {
        for version in [b'1', b'2', b'4', b'5', b'7'] {
            let data = [b'P', version, b'\n', b'1', b' ', b'1', b'\n'];

            assert!(matches!(
                header(&data),
                Err(PPMDecodeErrors::UnsupportedVariant(Some(v))) if v == version
            ));
        }
    }

    #[test]
    fn eleven_digits_is_too_long() {
        assert!(matches!(
            header(b"P6\n12345678901 1\n255\n"),
            Err(PPMDecodeErrors::NumberTooLong(MAX_TOKEN_DIGITS))
        ));
    }

    #[test]
    fn ten_digits_fit() {
        let options = DecoderOptions::default().set_max_width(usize::MAX);
        let mut reader = ByteReader::new(PCursor::new(b"P6\n1000000000 1\n255\n"));

        let header = read_header(&mut reader, &options).unwrap();
        assert_eq!(header.width, 1_000_000_000);
    }

    #[test]
    fn zero_token_never_fills_a_field() {
        // known quirk: the zero is dropped and the stream ends one field short
        assert!(matches!(
            header(b"P6\n0 4\n255\n"),
            Err(PPMDecodeErrors::HeaderIncomplete(2))
        ));
    }

    #[test]
    fn zero_token_digits_carry_into_next_token() {
        // known quirk: "0" stays in the accumulator and "4" joins it as "04"
        let header = header(b"P6 0 4 3 255\n").unwrap();

        assert_eq!((header.width, header.height, header.max_value), (4, 3, 255));
    }

    #[test]
    fn strict_mode_rejects_zero_token() {
        let options = DecoderOptions::default().set_strict_mode(true);
        let mut reader = ByteReader::new(PCursor::new(b"P6\n0 4\n255\n"));

        assert!(matches!(
            read_header(&mut reader, &options),
            Err(PPMDecodeErrors::InvalidHeaderValue("width"))
        ));
    }

    #[test]
    fn header_needs_terminating_separator() {
        assert!(matches!(
            header(b"P6\n2 2\n255"),
            Err(PPMDecodeErrors::HeaderIncomplete(2))
        ));
    }

    #[test]
    fn enforces_dimension_limits() {
        let options = DecoderOptions::default().set_max_height(8);
        let mut reader = ByteReader::new(PCursor::new(b"P6\n4 9\n255\n"));

        assert!(matches!(
            read_header(&mut reader, &options),
            Err(PPMDecodeErrors::LargeDimensions(8, 9))
        ));
    }

    #[test]
    fn sixteen_bit_max_value_is_refused() {
        assert!(matches!(
            header(b"P6\n1 1\n65535\n"),
            Err(PPMDecodeErrors::UnsupportedMaxValue(65535))
        ));
    }

    #[test]
    fn accumulator_take_resets() {
        let mut token = TokenAccumulator::default();
        token.push_digit(b'4').unwrap();
        token.push_digit(b'2').unwrap();

        assert_eq!(token.take(), 42);
        assert!(token.is_empty());
    }
}
