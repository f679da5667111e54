use image::GrayImage;

use crate::images::{Image, ImageRef};
use crate::ImageBufferError;

impl<'a> From<&'a GrayImage> for ImageRef<'a> {
    fn from(image: &'a GrayImage) -> Self {
        // GrayImage always holds exactly `width * height` samples.
        ImageRef {
            width: image.width(),
            height: image.height(),
            buffer: image.as_raw(),
        }
    }
}

impl TryFrom<GrayImage> for Image {
    type Error = ImageBufferError;

    fn try_from(image: GrayImage) -> Result<Self, Self::Error> {
        let (width, height) = image.dimensions();
        Image::from_vec(width, height, image.into_raw())
    }
}

impl TryFrom<Image> for GrayImage {
    type Error = ImageBufferError;

    fn try_from(image: Image) -> Result<Self, Self::Error> {
        let (width, height) = (image.width(), image.height());
        GrayImage::from_raw(width, height, image.into_vec())
            .ok_or(ImageBufferError::InvalidBufferSize)
    }
}
