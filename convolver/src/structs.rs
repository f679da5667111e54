use std::num::NonZeroU32;

use image_convolution as ic;

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub enum Algorithm {
    /// Reference convolution in one thread.
    Sequential,
    /// Rows are distributed between threads, all threads write
    /// directly into the result.
    NaiveParallel,
    /// Every thread convolves a block of rows into a private buffer
    /// which is merged into the result under a lock.
    /// Border pixels are copied from the source image.
    Partitioned,
}

impl Algorithm {
    pub fn with_threads(self, num_threads: NonZeroU32) -> ic::ConvolveAlg {
        match self {
            Self::Sequential => ic::ConvolveAlg::Sequential,
            Self::NaiveParallel => ic::ConvolveAlg::NaiveParallel(num_threads),
            Self::Partitioned => ic::ConvolveAlg::Partitioned(num_threads),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum KernelType {
    /// Leaves interior pixels unchanged.
    Identity,
    /// All weights are equal to `1 / (size * size)`.
    Box,
    /// Normalized Gaussian kernel with the given sigma.
    Gaussian,
    /// Sharpening kernel, only 3x3.
    Sharpen,
    /// Laplacian edge detector, only 3x3.
    Edge,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum KernelSize {
    #[value(name = "3")]
    Three,
    #[value(name = "5")]
    Five,
    #[value(name = "7")]
    Seven,
}

impl KernelSize {
    pub fn get(self) -> usize {
        match self {
            Self::Three => 3,
            Self::Five => 5,
            Self::Seven => 7,
        }
    }
}
