#![doc = include_str!("../README.md")]
//!
//! ## Feature flags
#![doc = document_features::document_features!()]

pub use convolution::{convolve_naive_parallel, convolve_partitioned, convolve_sequential};
pub use convolver::{ConvolveAlg, Convolver};
pub use errors::*;
pub use image_view::ImageView;
pub use images::{Image, ImageRef};
pub use kernel::Kernel;

mod convolution;
mod convolver;
mod errors;
mod image_view;
pub mod images;
mod kernel;
mod threading;
