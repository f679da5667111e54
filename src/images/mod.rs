//! Contains containers of grayscale images.
pub use self::image::*;

mod image;

#[cfg(feature = "image")]
mod image_crate;
