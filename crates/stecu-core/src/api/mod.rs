use std::path::Path;

use crate::media::{has_png_extension, is_png};
use crate::{Result, StecuError};

pub mod hide;
pub mod unveil;
pub mod unveil_raw;

/// Reads a stego image from disk, anything but PNG is refused.
fn read_png_file(secret_media: &Path) -> Result<Vec<u8>> {
    if !has_png_extension(secret_media) {
        return Err(StecuError::UnsupportedMedia);
    }
    let data = std::fs::read(secret_media).map_err(|source| StecuError::ReadError { source })?;
    if !is_png(&data) {
        return Err(StecuError::UnsupportedMedia);
    }

    Ok(data)
}
