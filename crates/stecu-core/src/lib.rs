//! # SteCU Core API
//!
//! Hides short text messages in the wavelet domain of an image. One color channel is split
//! into Haar subbands, the message bits are quantized into the diagonal detail coefficients,
//! and the channel is reconstructed. Unveiling tolerates small reconstruction errors by
//! searching the frame markers with a Hamming distance tolerance.
//!
//! The two main entry points work on encoded image data:
//! - [`embed`] takes a cover image (PNG, JPEG or BMP) and returns a PNG with the message
//! - [`extract`] takes such a PNG and returns the message
//!
//! # Usage Examples
//!
//! ## Hide a message in memory
//!
//! ```rust
//! use std::io::Cursor;
//! use image::{ImageBuffer, ImageFormat, Rgb, RgbImage};
//!
//! let cover: RgbImage = ImageBuffer::from_fn(200, 200, |x, y| {
//!     Rgb([x as u8, (60 + (x * 7 + y * 13) % 120) as u8, y as u8])
//! });
//! let mut cover_png = Cursor::new(Vec::new());
//! cover.write_to(&mut cover_png, ImageFormat::Png).unwrap();
//!
//! let stego_png = stecu_core::embed(cover_png.get_ref(), "HELLO").expect("Failed to hide message");
//! let message = stecu_core::extract(&stego_png).expect("Failed to unveil message");
//!
//! assert_eq!(message, "HELLO");
//! ```
//!
//! ## Hide a message in an image file
//!
//! ```rust,no_run
//! stecu_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_image("carrier-image.png")
//!     .with_output("image-with-a-secret.png")
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let message = stecu_core::api::unveil::prepare()
//!     .from_secret_file("image-with-a-secret.png")
//!     .execute()
//!     .expect("Failed to unveil message from image");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod commands;
pub mod error;
pub mod framing;
pub mod media;
pub mod result;

pub use crate::error::StecuError;
pub use crate::media::image::{Boundary, Channel, Extraction, RecoveryThresholds};
pub use crate::media::{CodecOptions, Media, Persist};
pub use crate::result::Result;

/// Hides `message` in the cover image data and returns the stego image as PNG.
pub fn embed(cover_image: &[u8], message: &str) -> Result<Vec<u8>> {
    embed_with_options(cover_image, message, &CodecOptions::default())
}

pub fn embed_with_options(cover_image: &[u8], message: &str, opts: &CodecOptions) -> Result<Vec<u8>> {
    let mut media = Media::from_bytes(cover_image)?;
    media.hide_message(message, opts)?;

    media.to_png_bytes()
}

/// Recovers the message hidden by [`embed`]. Only PNG data is accepted.
pub fn extract(stego_image: &[u8]) -> Result<String> {
    extract_with_options(stego_image, &CodecOptions::default()).map(|e| e.message)
}

pub fn extract_with_options(stego_image: &[u8], opts: &CodecOptions) -> Result<Extraction> {
    if !media::is_png(stego_image) {
        return Err(StecuError::UnsupportedMedia);
    }

    Media::from_bytes(stego_image)?.unveil_message(opts)
}
