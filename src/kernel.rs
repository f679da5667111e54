use crate::KernelError;

/// Square convolution kernel with odd size `K`, known at compile time.
///
/// Weights are stored in row-major order. Instantiating a kernel with
/// an even size is a compile-time error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel<const K: usize> {
    weights: [[f32; K]; K],
}

impl<const K: usize> Kernel<K> {
    const ODD_SIZE: () = assert!(K % 2 == 1, "Size of kernel must be odd");

    pub const fn new(weights: [[f32; K]; K]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::ODD_SIZE;
        Self { weights }
    }

    /// Create a kernel from a flat slice of `K * K` weights in row-major order.
    pub fn from_slice(weights: &[f32]) -> Result<Self, KernelError> {
        if weights.len() != K * K {
            return Err(KernelError::InvalidWeightsCount);
        }
        let mut rows = [[0.; K]; K];
        for (row, src_row) in rows.iter_mut().zip(weights.chunks_exact(K)) {
            row.copy_from_slice(src_row);
        }
        Ok(Self::new(rows))
    }

    /// Kernel that leaves interior pixels unchanged.
    pub const fn identity() -> Self {
        let mut weights = [[0.; K]; K];
        weights[K / 2][K / 2] = 1.;
        Self::new(weights)
    }

    /// Kernel with all weights equal to `1 / (K * K)`.
    pub fn box_blur() -> Self {
        Self::new([[1. / (K * K) as f32; K]; K])
    }

    /// Sampled Gaussian kernel, normalized to the sum of weights equal to 1.0.
    ///
    /// Non-positive `sigma` gives the [identity](Kernel::identity) kernel.
    pub fn gaussian(sigma: f32) -> Self {
        if sigma <= 0. || sigma.is_nan() {
            return Self::identity();
        }
        let radius = (K / 2) as f32;
        let scale = -0.5 / (sigma * sigma);
        let mut weights = [[0.; K]; K];
        let mut sum = 0.;
        for (y, row) in weights.iter_mut().enumerate() {
            let dy = y as f32 - radius;
            for (x, weight) in row.iter_mut().enumerate() {
                let dx = x as f32 - radius;
                *weight = ((dx * dx + dy * dy) * scale).exp();
                sum += *weight;
            }
        }
        weights
            .iter_mut()
            .flatten()
            .for_each(|weight| *weight /= sum);
        Self::new(weights)
    }

    /// Size of one side of the kernel.
    #[inline]
    pub const fn size(&self) -> usize {
        K
    }

    /// Half-width of the kernel, `K / 2`.
    #[inline]
    pub const fn radius(&self) -> usize {
        K / 2
    }

    /// # Panics
    ///
    /// If `row` or `col` is not less than `K`.
    #[inline]
    pub fn weight(&self, row: usize, col: usize) -> f32 {
        self.weights[row][col]
    }

    #[inline]
    pub fn rows(&self) -> &[[f32; K]; K] {
        &self.weights
    }
}

impl Kernel<3> {
    /// Sharpening 3x3 kernel.
    pub const SHARPEN: Self = Self::new([[0., -1., 0.], [-1., 5., -1.], [0., -1., 0.]]);
    /// The 8-connectivity laplacian 3x3 kernel.
    pub const EDGE: Self = Self::new([[-1., -1., -1.], [-1., 8., -1.], [-1., -1., -1.]]);
}
