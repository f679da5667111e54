#![allow(dead_code)]
use std::num::NonZeroU32;

use image_convolution::{Image, ImageView, Kernel};

pub fn non_zero_u32(v: u32) -> NonZeroU32 {
    NonZeroU32::new(v).unwrap()
}

pub fn flat_image(width: u32, height: u32, value: u8) -> Image {
    Image::from_vec(width, height, vec![value; (width * height) as usize]).unwrap()
}

/// Deterministic image with a mix of gradients and pseudo-random noise.
pub fn noise_image(width: u32, height: u32) -> Image {
    let mut state: u32 = 0x2545_f491;
    let mut buffer = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let value = (x * 7 + y * 3) as u8 ^ (state >> 24) as u8;
            buffer.push(value);
        }
    }
    Image::from_vec(width, height, buffer).unwrap()
}

/// Straightforward convolution of one pixel, used as a reference.
pub fn reference_pixel<const K: usize>(
    image: &impl ImageView,
    kernel: &Kernel<K>,
    x: u32,
    y: u32,
) -> u8 {
    let radius = (K / 2) as u32;
    let mut acc = 0u8;
    for dr in 0..K as u32 {
        for dc in 0..K as u32 {
            let sample = image.pixel(x - radius + dc, y - radius + dr).unwrap();
            let weight = kernel.weight(dr as usize, dc as usize);
            let product = (sample as f32 * weight) as i32;
            acc = acc.wrapping_add(product.rem_euclid(256) as u8);
        }
    }
    acc
}

/// Returns `true` if the pixel has the whole neighbourhood inside the image.
pub fn is_interior(width: u32, height: u32, radius: u32, x: u32, y: u32) -> bool {
    x >= radius && y >= radius && x + radius < width && y + radius < height
}

/// Positions of all pixels of the image.
pub fn positions(width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
    (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
}

pub fn interior_pixels(image: &impl ImageView, radius: u32) -> Vec<u8> {
    let (width, height) = (image.width(), image.height());
    positions(width, height)
        .filter(|&(x, y)| is_interior(width, height, radius, x, y))
        .map(|(x, y)| image.pixel(x, y).unwrap())
        .collect()
}
