use std::num::NonZeroU32;
use std::ops::Range;

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::ConvolutionError;

/// Creates a pool with exactly `num_threads` workers.
/// The pool lives only for the duration of one convolution.
pub(crate) fn build_pool(num_threads: NonZeroU32) -> Result<ThreadPool, ConvolutionError> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(num_threads.get() as usize)
        .thread_name(|i| format!("convolution-worker-{i}"))
        .build()?;
    Ok(pool)
}

/// Contiguous block of image rows owned by one worker.
#[derive(Debug)]
pub(crate) struct RowsMut<'a> {
    /// Index of the first row of the block inside the whole image.
    pub first_row: usize,
    pub pixels: &'a mut [u8],
}

/// Splits rows `[first_row, first_row + rows_count)` of the image buffer
/// on `num_parts` contiguous blocks.
///
/// Heights of blocks differ by one row at most, the first blocks get
/// one extra row if `rows_count` is not divisible by `num_parts`.
/// The number of blocks never exceeds the number of rows.
pub(crate) fn split_rows_mut(
    buffer: &mut [u8],
    row_size: usize,
    first_row: usize,
    rows_count: usize,
    num_parts: NonZeroU32,
) -> Vec<RowsMut<'_>> {
    let num_parts = (num_parts.get() as usize).min(rows_count);
    if num_parts == 0 || row_size == 0 {
        return Vec::new();
    }
    let mut res = Vec::with_capacity(num_parts);
    let step = rows_count / num_parts;
    let mut modulo = rows_count % num_parts;
    let mut top = first_row;
    let mut remains_pixels = buffer.split_at_mut(top * row_size).1;
    for _ in 0..num_parts {
        let mut part_height = step;
        if modulo > 0 {
            part_height += 1;
            modulo -= 1;
        }
        let (pixels, tail) = remains_pixels.split_at_mut(part_height * row_size);
        res.push(RowsMut {
            first_row: top,
            pixels,
        });
        remains_pixels = tail;
        top += part_height;
    }
    debug_assert!(top - first_row == rows_count);
    res
}

/// Splits `height` rows on blocks of `ceil(height / num_parts)` rows.
///
/// The last non-empty block may be shorter than others.
/// Empty blocks of trailing workers are not returned.
pub(crate) fn ceil_row_blocks(height: usize, num_parts: NonZeroU32) -> Vec<Range<usize>> {
    let num_parts = num_parts.get() as usize;
    let chunk = height.div_ceil(num_parts);
    (0..num_parts)
        .map(|part| {
            let start = (part * chunk).min(height);
            let end = (start + chunk).min(height);
            start..end
        })
        .filter(|rows| !rows.is_empty())
        .collect()
}
