use std::ops::Range;

use crate::Kernel;

pub use naive_parallel::convolve_naive_parallel;
pub use partitioned::convolve_partitioned;
pub use sequential::convolve_sequential;

mod naive_parallel;
mod partitioned;
mod sequential;

/// Multiplies a sample by a weight and truncates the product to 8 bits.
///
/// The product is truncated toward zero and then reduced modulo 256,
/// so negative and too big products wrap around instead of saturating.
#[inline(always)]
pub(crate) fn weighted_sample(sample: u8, weight: f32) -> u8 {
    (sample as f32 * weight) as i32 as u8
}

/// Computes one output sample from the `K x K` neighbourhood whose
/// top-left sample has index `top_left` in `pixels`.
///
/// Weighted samples are accumulated with 8-bit wrap-around arithmetic.
#[inline(always)]
pub(crate) fn convolve_at<const K: usize>(
    pixels: &[u8],
    row_size: usize,
    top_left: usize,
    kernel: &Kernel<K>,
) -> u8 {
    let mut acc = 0u8;
    for (dr, weights) in kernel.rows().iter().enumerate() {
        let start = top_left + dr * row_size;
        let window = &pixels[start..start + K];
        for (&sample, &weight) in window.iter().zip(weights) {
            acc = acc.wrapping_add(weighted_sample(sample, weight));
        }
    }
    acc
}

/// Range of indexes visited by the scan of the sequential and
/// naive parallel convolutions.
///
/// The outer index is bounded by `width`, the inner one by `height`, and
/// the output position is addressed as `outer * width + inner`. Both bounds
/// are clamped by the shorter side of the image, so every visited
/// neighbourhood lies inside the image and no position is written twice.
/// For square images it is the usual `[radius, size - radius)` range.
pub(crate) fn transposed_scan_range(width: usize, height: usize, radius: usize) -> Range<usize> {
    let extent = width.min(height);
    let end = extent.saturating_sub(radius).max(radius);
    radius..end
}

/// Convolves one scanned row of the image.
///
/// `dst_row` is the output row with index `outer`, only positions
/// from `inner` range are written.
#[inline]
pub(crate) fn convolve_scan_row<const K: usize>(
    src_pixels: &[u8],
    row_size: usize,
    outer: usize,
    inner: Range<usize>,
    kernel: &Kernel<K>,
    dst_row: &mut [u8],
) {
    let radius = K / 2;
    let first_src_row = (outer - radius) * row_size;
    for col in inner {
        let top_left = first_src_row + col - radius;
        dst_row[col] = convolve_at(src_pixels, row_size, top_left, kernel);
    }
}
