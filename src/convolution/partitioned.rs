use std::num::NonZeroU32;
use std::ops::Range;
use std::sync::{Mutex, PoisonError};

use rayon::prelude::*;

use super::convolve_at;
use crate::threading::{build_pool, ceil_row_blocks};
use crate::{ConvolutionError, Image, ImageView, Kernel};

/// Convolves the image with the kernel using `num_threads` workers
/// with private output buffers.
///
/// The image is split into blocks of `ceil(height / num_threads)` rows.
/// Every worker convolves its block into a private buffer, and after all
/// blocks are ready, workers one at a time copy their buffers into the result.
///
/// Unlike [convolve_sequential](crate::convolve_sequential), every pixel of
/// the result is written: pixels closer than the kernel radius to any edge
/// of the image are copied from the source image as is.
pub fn convolve_partitioned<const K: usize>(
    src_image: &impl ImageView,
    kernel: &Kernel<K>,
    num_threads: NonZeroU32,
) -> Result<Image, ConvolutionError> {
    let pool = build_pool(num_threads)?;

    let width = src_image.width() as usize;
    let height = src_image.height() as usize;
    let mut dst_image = Image::new(src_image.width(), src_image.height());

    let src_pixels = src_image.pixels();
    let blocks = ceil_row_blocks(height, num_threads);
    {
        let shared_dst = Mutex::new(dst_image.pixels_mut());
        pool.install(|| {
            // Collecting all blocks is the barrier before merging.
            let private_blocks: Vec<PrivateBlock> = blocks
                .into_par_iter()
                .map(|rows| PrivateBlock::convolve(src_pixels, width, height, rows, kernel))
                .collect();
            private_blocks
                .into_par_iter()
                .for_each(|block| block.merge_into(&shared_dst, width));
        });
    }
    Ok(dst_image)
}

/// Rows of the result computed by one worker.
struct PrivateBlock {
    rows: Range<usize>,
    pixels: Vec<u8>,
}

impl PrivateBlock {
    fn convolve<const K: usize>(
        src_pixels: &[u8],
        width: usize,
        height: usize,
        rows: Range<usize>,
        kernel: &Kernel<K>,
    ) -> Self {
        let radius = kernel.radius();
        let interior_rows = radius..height.saturating_sub(radius);
        let interior_cols = radius..width.saturating_sub(radius);

        let mut pixels = vec![0u8; rows.len() * width];
        if width > 0 {
            let dst_rows = pixels.chunks_exact_mut(width);
            for (row, dst_row) in rows.clone().zip(dst_rows) {
                let src_row = &src_pixels[row * width..(row + 1) * width];
                if !interior_rows.contains(&row) {
                    dst_row.copy_from_slice(src_row);
                    continue;
                }
                let first_src_row = (row - radius) * width;
                for (col, dst_pixel) in dst_row.iter_mut().enumerate() {
                    *dst_pixel = if interior_cols.contains(&col) {
                        convolve_at(src_pixels, width, first_src_row + col - radius, kernel)
                    } else {
                        src_row[col]
                    };
                }
            }
        }
        Self { rows, pixels }
    }

    fn merge_into(self, shared_dst: &Mutex<&mut [u8]>, width: usize) {
        let mut dst_pixels = shared_dst.lock().unwrap_or_else(PoisonError::into_inner);
        let start = self.rows.start * width;
        dst_pixels[start..start + self.pixels.len()].copy_from_slice(&self.pixels);
    }
}
