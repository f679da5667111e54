use std::num::NonZeroU32;

use rayon::prelude::*;

use super::{convolve_scan_row, transposed_scan_range};
use crate::threading::{build_pool, split_rows_mut};
use crate::{ConvolutionError, Image, ImageView, Kernel};

/// Convolves the image with the kernel using `num_threads` workers.
///
/// Rows visited by the scan are distributed between workers by contiguous
/// ranges of nearly equal size. Every worker writes directly into its own
/// rows of the result, so workers need no synchronisation and the result
/// is identical to [convolve_sequential](crate::convolve_sequential)
/// for any number of threads.
pub fn convolve_naive_parallel<const K: usize>(
    src_image: &impl ImageView,
    kernel: &Kernel<K>,
    num_threads: NonZeroU32,
) -> Result<Image, ConvolutionError> {
    let pool = build_pool(num_threads)?;

    let width = src_image.width() as usize;
    let height = src_image.height() as usize;
    let mut dst_image = Image::new(src_image.width(), src_image.height());

    let scan_range = transposed_scan_range(width, height, kernel.radius());
    let src_pixels = src_image.pixels();
    let parts = split_rows_mut(
        dst_image.pixels_mut(),
        width,
        scan_range.start,
        scan_range.len(),
        num_threads,
    );

    pool.install(|| {
        parts.into_par_iter().for_each(|part| {
            let rows = part.pixels.chunks_exact_mut(width);
            for (outer, dst_row) in (part.first_row..).zip(rows) {
                convolve_scan_row(
                    src_pixels,
                    width,
                    outer,
                    scan_range.clone(),
                    kernel,
                    dst_row,
                );
            }
        });
    });
    Ok(dst_image)
}
