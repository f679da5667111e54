use std::num::NonZeroU32;

use crate::convolution;
use crate::{ConvolutionError, Image, ImageView, Kernel};

/// Strategy used to compute a convolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum ConvolveAlg {
    /// Reference implementation working in the current thread.
    #[default]
    Sequential,
    /// Rows are distributed between the given number of threads,
    /// every thread writes directly into the result.
    NaiveParallel(NonZeroU32),
    /// Every thread of the given number computes a block of rows in
    /// a private buffer and merges it into the result under a lock.
    /// Border pixels are copied from the source image.
    Partitioned(NonZeroU32),
}

impl ConvolveAlg {
    /// Number of threads used by the algorithm.
    pub fn num_threads(&self) -> NonZeroU32 {
        match *self {
            Self::Sequential => NonZeroU32::MIN,
            Self::NaiveParallel(num_threads) | Self::Partitioned(num_threads) => num_threads,
        }
    }
}

/// Methods of this structure used to convolve images.
#[derive(Default, Debug, Clone)]
pub struct Convolver {
    pub algorithm: ConvolveAlg,
}

impl Convolver {
    pub fn new(algorithm: ConvolveAlg) -> Self {
        Self { algorithm }
    }

    /// Convolves the source image with the kernel and returns
    /// a new image with the same dimensions.
    pub fn convolve<const K: usize>(
        &self,
        src_image: &impl ImageView,
        kernel: &Kernel<K>,
    ) -> Result<Image, ConvolutionError> {
        match self.algorithm {
            ConvolveAlg::Sequential => Ok(convolution::convolve_sequential(src_image, kernel)),
            ConvolveAlg::NaiveParallel(num_threads) => {
                convolution::convolve_naive_parallel(src_image, kernel, num_threads)
            }
            ConvolveAlg::Partitioned(num_threads) => {
                convolution::convolve_partitioned(src_image, kernel, num_threads)
            }
        }
    }
}
