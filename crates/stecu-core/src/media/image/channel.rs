use image::RgbImage;

use crate::result::Result;
use crate::StecuError;

/// The color channel that carries the hidden message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Channel {
    Red,
    #[default]
    Green,
    Blue,
}

impl Channel {
    fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// Real valued matrix, row-major, used for channel samples as well as for wavelet coefficients
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    width: usize,
    height: usize,
    samples: Vec<f64>,
}

impl Matrix {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            samples: vec![0.0; width * height],
        }
    }

    /// splits one color channel out of an image
    pub fn from_channel(image: &RgbImage, channel: Channel) -> Self {
        let (width, height) = image.dimensions();
        let samples = image
            .pixels()
            .map(|p| f64::from(p.0[channel.index()]))
            .collect();

        Self {
            width: width as usize,
            height: height as usize,
            samples,
        }
    }

    /// Writes the samples back into one color channel of `image`, rounded and clipped to 0..=255.
    /// Other channels are left as they are.
    pub fn merge_into_channel(&self, image: &mut RgbImage, channel: Channel) -> Result<()> {
        let (image_width, image_height) = image.dimensions();
        if (image_width as usize, image_height as usize) != (self.width, self.height) {
            return Err(StecuError::DimensionMismatch {
                matrix_width: self.width,
                matrix_height: self.height,
                image_width,
                image_height,
            });
        }
        for (pixel, sample) in image.pixels_mut().zip(self.samples.iter()) {
            pixel.0[channel.index()] = sample.round().clamp(0.0, 255.0) as u8;
        }

        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.samples[row * self.width + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.samples[row * self.width + col] = value;
    }
}
