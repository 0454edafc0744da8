/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

use crate::buffer::Pixel;

/// Places packed pixels into the output in file order, bottom row first.
///
/// The row cursor starts on the last buffer row and moves up one row
/// every `width` pixels, the column cursor runs left to right.
pub(crate) struct PixelPacker {
    pixels:    Vec<u32>,
    width:     usize,
    column:    usize,
    // rows still to fill, the row being written is `rows_left - 1`
    rows_left: usize,
    written:   usize
}

impl PixelPacker {
    /// `pixels` must hold `width * height` entries
    pub fn new(pixels: Vec<u32>, width: usize, height: usize) -> PixelPacker {
        debug_assert_eq!(pixels.len(), width * height);

        PixelPacker {
            pixels,
            width,
            column: 0,
            rows_left: height,
            written: 0
        }
    }

    #[inline]
    pub fn push(&mut self, pixel: Pixel) {
        let row = self.rows_left - 1;

        self.pixels[row * self.width + self.column] = pixel.pack();
        self.written += 1;
        self.column += 1;

        if self.column == self.width {
            self.column = 0;
            self.rows_left -= 1;
        }
    }

    pub const fn is_complete(&self) -> bool {
        self.rows_left == 0
    }
    /// Number of pixels placed so far
    pub const fn written(&self) -> usize {
        self.written
    }

    pub fn finish(self) -> Vec<u32> {
        self.pixels
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use crate::buffer::Pixel;
    use crate::packer::PixelPacker;

    #[test]
    fn first_file_row_lands_on_last_buffer_row() {
        let mut packer = PixelPacker::new(vec![0; 6], 3, 2);

        for value in 1..=6 {
            assert!(!packer.is_complete());
            packer.push(Pixel::new(value, 0, 0));
        }
        assert!(packer.is_complete());
        assert_eq!(packer.written(), 6);

        let reds: vec::Vec<u32> = packer.finish().iter().map(|w| w & 0xFF).collect();
        assert_eq!(reds, [4, 5, 6, 1, 2, 3]);
    }

    #[test]
    fn single_column_image() {
        let mut packer = PixelPacker::new(vec![0; 3], 1, 3);

        packer.push(Pixel::new(1, 0, 0));
        packer.push(Pixel::new(2, 0, 0));
        packer.push(Pixel::new(3, 0, 0));

        assert!(packer.is_complete());
        assert_eq!(
            packer.finish(),
            [
                Pixel::new(3, 0, 0).pack(),
                Pixel::new(2, 0, 0).pack(),
                Pixel::new(1, 0, 0).pack()
            ]
        );
    }
}
