use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageBufferError {
    #[error("Size of buffer is smaller than required")]
    InvalidBufferSize,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    #[error("Count of weights don't match to the square of kernel size")]
    InvalidWeightsCount,
}

#[derive(Error, Debug)]
pub enum ConvolutionError {
    #[error("Failed to build a pool of worker threads: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
