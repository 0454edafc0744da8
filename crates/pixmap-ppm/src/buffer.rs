/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Packed pixels and the buffer holding them
use alloc::vec::Vec;

use crate::errors::PPMDecodeErrors;

/// Alpha given to every decoded pixel, PPM has no alpha channel
pub const OPAQUE_ALPHA: u8 = 255;

/// One RGB sample triple
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8) -> Pixel {
        Pixel { r, g, b }
    }

    /// Pack into a 32 bit word laid out as `A:B:G:R` from the most to the
    /// least significant byte, with alpha forced to [`OPAQUE_ALPHA`].
    ///
    /// On little endian machines the word's bytes are `R,G,B,A` in memory.
    ///
    /// # Example
    /// ```
    /// use pixmap_ppm::Pixel;
    ///
    /// assert_eq!(Pixel::new(0x11, 0x22, 0x33).pack(), 0xFF33_2211);
    /// ```
    #[inline(always)]
    pub const fn pack(self) -> u32 {
        u32::from_le_bytes([self.r, self.g, self.b, OPAQUE_ALPHA])
    }

    /// Recover the RGB channels from a packed word, alpha is dropped
    #[inline(always)]
    pub const fn unpack(word: u32) -> Pixel {
        let [r, g, b, _] = word.to_le_bytes();
        Pixel { r, g, b }
    }
}

/// Decoded image, `width * height` packed pixels.
///
/// Rows are stored bottom to top: buffer row 0 is the last scanline of the
/// file and buffer row `height - 1` the first one. This matches graphics
/// APIs whose texture origin is the bottom left corner.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PixelBuffer {
    width:     usize,
    height:    usize,
    max_value: usize,
    pixels:    Vec<u32>
}

impl PixelBuffer {
    pub(crate) fn new_unchecked(
        width: usize, height: usize, max_value: usize, pixels: Vec<u32>
    ) -> PixelBuffer {
        PixelBuffer {
            width,
            height,
            max_value,
            pixels
        }
    }

    /// Build a buffer from packed pixels laid out bottom to top.
    ///
    /// Returns `None` if a dimension or the max value is zero, the max value is
    /// above 255, the pixel count is not `width * height` or a channel exceeds
    /// the max value.
    pub fn from_pixels(
        width: usize, height: usize, max_value: usize, pixels: Vec<u32>
    ) -> Option<PixelBuffer> {
        if width == 0 || height == 0 || max_value == 0 || max_value > 255 {
            return None;
        }
        if width.checked_mul(height)? != pixels.len() {
            return None;
        }
        let in_range = pixels.iter().all(|word| {
            let p = Pixel::unpack(*word);
            usize::from(p.r.max(p.g).max(p.b)) <= max_value
        });

        if !in_range {
            return None;
        }
        Some(PixelBuffer::new_unchecked(width, height, max_value, pixels))
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }
    /// The max value read from the header
    pub const fn max_value(&self) -> usize {
        self.max_value
    }

    /// Width and height
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u32> {
        self.pixels
    }

    /// Pixel at column `x` of buffer row `y`, where row 0 is the bottom row
    pub fn pixel_at(&self, x: usize, y: usize) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(Pixel::unpack(self.pixels[y * self.width + x]))
    }

    /// Iterate over rows in file order, top scanline first
    pub fn scanlines(&self) -> impl DoubleEndedIterator<Item = &[u32]> + '_ {
        self.pixels.chunks_exact(self.width).rev()
    }

    /// The packed words viewed as native endian bytes
    ///
    /// On little endian targets this is `R,G,B,A` per pixel, ready to
    /// upload as an RGBA8 texture.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Copy out `R,G,B,A` bytes per pixel regardless of target endianness
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|word| word.to_le_bytes()).collect()
    }
}

/// Allocate a zeroed buffer for `width * height` pixels.
pub(crate) fn allocate_pixels(width: usize, height: usize) -> Result<Vec<u32>, PPMDecodeErrors> {
    let size = width
        .checked_mul(height)
        .ok_or(PPMDecodeErrors::AllocationFailure(usize::MAX))?;

    let mut pixels = Vec::new();

    pixels
        .try_reserve_exact(size)
        .map_err(|_| PPMDecodeErrors::AllocationFailure(size))?;
    pixels.resize(size, 0);

    Ok(pixels)
}
