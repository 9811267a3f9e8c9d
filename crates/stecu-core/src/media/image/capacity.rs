use crate::framing::FRAME_OVERHEAD_BITS;
use crate::result::Result;
use crate::StecuError;

/// Images below this pixel count are refused.
pub const MIN_PIXEL_COUNT: usize = 10_000;

/// Share of the usable coefficients a frame may occupy.
pub const USABLE_CAPACITY_RATIO: f64 = 0.85;

/// Decides whether an image is usable and whether a frame fits into it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacityPolicy {
    pub min_pixels: usize,
    pub usable_ratio: f64,
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        Self {
            min_pixels: MIN_PIXEL_COUNT,
            usable_ratio: USABLE_CAPACITY_RATIO,
        }
    }
}

impl CapacityPolicy {
    pub fn check_size(&self, width: u32, height: u32) -> Result<()> {
        let pixels = width as usize * height as usize;
        if pixels < self.min_pixels {
            return Err(StecuError::ImageTooSmall {
                width,
                height,
                pixels,
                minimum: self.min_pixels,
            });
        }

        Ok(())
    }

    /// number of frame bits accepted for the given coefficient capacity
    pub fn allowed_bits(&self, capacity: usize) -> usize {
        (capacity as f64 * self.usable_ratio).floor() as usize
    }

    /// longest message in characters that still fits
    pub fn max_message_chars(&self, capacity: usize) -> usize {
        (self.allowed_bits(capacity) / 8).saturating_sub(FRAME_OVERHEAD_BITS / 8)
    }

    pub fn check_frame(&self, frame_bits: usize, capacity: usize) -> Result<()> {
        let available = self.allowed_bits(capacity);
        if frame_bits > available {
            return Err(StecuError::CapacityExceeded {
                required: frame_bits,
                available,
                max_chars: self.max_message_chars(capacity),
            });
        }

        Ok(())
    }
}
