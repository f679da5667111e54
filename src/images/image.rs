use crate::{ImageBufferError, ImageView};

/// Simple reference to grayscale image data that provides [ImageView].
#[derive(Debug, Copy, Clone)]
pub struct ImageRef<'a> {
    pub(super) width: u32,
    pub(super) height: u32,
    pub(super) buffer: &'a [u8],
}

impl<'a> ImageRef<'a> {
    /// Create an image from slice with pixels-data.
    ///
    /// Buffer may be bigger than `width * height`, extra data is ignored.
    pub fn new(width: u32, height: u32, buffer: &'a [u8]) -> Result<Self, ImageBufferError> {
        let size = width as usize * height as usize;
        if buffer.len() < size {
            return Err(ImageBufferError::InvalidBufferSize);
        }
        Ok(Self {
            width,
            height,
            buffer: &buffer[..size],
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Buffer with image pixels data.
    #[inline]
    pub fn buffer(&self) -> &'a [u8] {
        self.buffer
    }

    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.buffer.into()
    }
}

impl ImageView for ImageRef<'_> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixels(&self) -> &[u8] {
        self.buffer
    }
}

/// Grayscale image container that owns its pixels.
///
/// Every convolution returns a new instance of this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    buffer: Vec<u8>,
}

impl Image {
    /// Create an empty image with given dimensions.
    /// All pixels are set to zero.
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            buffer: vec![0; size],
        }
    }

    /// Create an image from vector with pixels data.
    ///
    /// Vector may be bigger than `width * height`, it is truncated to this size.
    pub fn from_vec(width: u32, height: u32, mut buffer: Vec<u8>) -> Result<Self, ImageBufferError> {
        let size = width as usize * height as usize;
        if buffer.len() < size {
            return Err(ImageBufferError::InvalidBufferSize);
        }
        buffer.truncate(size);
        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Buffer with image pixels data.
    #[inline]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Mutable buffer with image pixels data.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.buffer
    }

    /// Creates a reference to the pixels of this image.
    #[inline]
    pub fn view(&self) -> ImageRef<'_> {
        ImageRef {
            width: self.width,
            height: self.height,
            buffer: &self.buffer,
        }
    }
}

impl ImageView for Image {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixels(&self) -> &[u8] {
        &self.buffer
    }
}
