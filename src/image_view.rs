/// A read-only view of single-channel 8-bit image data.
///
/// Implementations must return from [ImageView::pixels] at least
/// `width * height` samples stored in row-major order.
pub trait ImageView {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Samples of the image in row-major order.
    fn pixels(&self) -> &[u8];

    /// Returns the sample at the given position or `None`
    /// if the position is out of the image boundaries.
    fn pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let index = y as usize * self.width() as usize + x as usize;
        self.pixels().get(index).copied()
    }

    fn iter_rows(&self) -> impl Iterator<Item = &[u8]> {
        let width = self.width() as usize;
        let height = self.height() as usize;
        if width == 0 {
            [].chunks_exact(1)
        } else {
            self.pixels()
                .get(..width * height)
                .unwrap_or_default()
                .chunks_exact(width)
        }
    }
}
