/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::{Rng, WyRand};
use pixmap_core::bytestream::PCursor;
use pixmap_ppm::{PPMDecoder, PPMEncoder, Pixel, PixelBuffer, PpmFormat};

fn random_buffer(rng: &mut WyRand) -> PixelBuffer {
    let width = rng.generate_range(1_usize..=33);
    let height = rng.generate_range(1_usize..=33);
    let max_value = rng.generate_range(1_usize..=255);

    let pixels = (0..width * height)
        .map(|_| {
            let mut channel = || rng.generate_range(0_usize..=max_value) as u8;
            Pixel::new(channel(), channel(), channel()).pack()
        })
        .collect();

    PixelBuffer::from_pixels(width, height, max_value, pixels).unwrap()
}

fn round_trip(buffer: &PixelBuffer, format: PpmFormat) -> PixelBuffer {
    let mut encoded = vec![];
    PPMEncoder::new(buffer)
        .set_format(format)
        .encode(&mut encoded)
        .unwrap();

    PPMDecoder::new(PCursor::new(encoded)).decode().unwrap()
}

#[test]
fn binary_round_trip_random() {
    let mut rng = WyRand::new_seed(0x5eed);

    for _ in 0..64 {
        let buffer = random_buffer(&mut rng);
        assert_eq!(round_trip(&buffer, PpmFormat::Binary), buffer);
    }
}

#[test]
fn ascii_round_trip_random() {
    let mut rng = WyRand::new_seed(0xa5c11);

    for _ in 0..16 {
        let buffer = random_buffer(&mut rng);
        assert_eq!(round_trip(&buffer, PpmFormat::Ascii), buffer);
    }
}

#[test]
fn round_trip_keeps_rgb_and_forces_alpha() {
    // alpha bits in the input are not part of the file
    let pixels = vec![0x1234_5678, 0x0000_0000, 0x7F01_0203];
    let buffer = PixelBuffer::from_pixels(3, 1, 255, pixels).unwrap();

    let decoded = round_trip(&buffer, PpmFormat::Binary);

    for (before, after) in buffer.pixels().iter().zip(decoded.pixels()) {
        assert_eq!(Pixel::unpack(*before), Pixel::unpack(*after));
        assert_eq!(after >> 24, 0xFF);
    }
}
