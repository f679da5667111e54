use super::{convolve_scan_row, transposed_scan_range};
use crate::{Image, ImageView, Kernel};

/// Convolves the image with the kernel in the current thread.
///
/// Only interior pixels visited by the scan are written, all
/// other pixels of the result are left equal to zero.
///
/// The scan bounds the outer (row) index by the width of the image and the
/// inner (column) index by its height, both clamped by the shorter side.
/// For non-square images this means that only the leading
/// `min(width, height)` square of the image is convolved.
pub fn convolve_sequential<const K: usize>(
    src_image: &impl ImageView,
    kernel: &Kernel<K>,
) -> Image {
    let width = src_image.width() as usize;
    let height = src_image.height() as usize;
    let mut dst_image = Image::new(src_image.width(), src_image.height());

    let scan_range = transposed_scan_range(width, height, kernel.radius());
    let src_pixels = src_image.pixels();
    let dst_pixels = dst_image.pixels_mut();
    for outer in scan_range.clone() {
        let dst_row = &mut dst_pixels[outer * width..(outer + 1) * width];
        convolve_scan_row(
            src_pixels,
            width,
            outer,
            scan_range.clone(),
            kernel,
            dst_row,
        );
    }
    dst_image
}
