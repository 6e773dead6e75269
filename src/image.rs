use crate::{color::RGBAColorFormat, error::Error, Result};

pub mod grid;
pub mod reader;

/// A decoded image as a flat, row-major sequence of RGBA samples.
pub struct Image {
    width: usize,
    height: usize,
    dots: Vec<RGBAColorFormat>,
}

impl Image {
    pub fn new(width: usize, height: usize, dots: Vec<RGBAColorFormat>) -> Result<Self> {
        let expected = width * height;
        if dots.len() != expected {
            return Err(Error::PixelCountMismatch {
                expected,
                actual: dots.len(),
            });
        }
        Ok(Image {
            width,
            height,
            dots,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dots(&self) -> &[RGBAColorFormat] {
        &self.dots
    }
}

pub trait ImageReader {
    fn read_image(&mut self) -> Result<Image>;
}
