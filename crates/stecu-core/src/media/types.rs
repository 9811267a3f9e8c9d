use std::fs::File;
use std::io::{Cursor, Seek, Write};
use std::path::Path;

use image::{ImageFormat, RgbImage};
use log::error;

use crate::error::StecuError;
use crate::media::image::{DwtCodec, Extraction};
use crate::media::CodecOptions;
use crate::result::Result;

use super::Persist;

/// a carrier image, normalized to 8-bit RGB
#[derive(Debug, Clone)]
pub struct Media {
    image: RgbImage,
}

impl Media {
    pub fn from_image(image: RgbImage) -> Self {
        Self { image }
    }

    /// Decodes PNG, JPEG or BMP data, alpha and higher bit depths are dropped.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(data)
            .map_err(|e| {
                error!("Error decoding image: {e}");
                StecuError::InvalidImageMedia
            })?
            .to_rgb8();

        Ok(Self { image })
    }

    pub fn from_file(f: &Path) -> Result<Self> {
        let data = std::fs::read(f).map_err(|source| StecuError::ReadError { source })?;

        Self::from_bytes(&data)
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    pub fn hide_message(&mut self, message: &str, opts: &CodecOptions) -> Result<&mut Self> {
        self.image = DwtCodec::hide(&self.image, message, opts)?;

        Ok(self)
    }

    pub fn unveil_message(&self, opts: &CodecOptions) -> Result<Extraction> {
        DwtCodec::unveil(&self.image, opts)
    }

    /// Always PNG, lossy formats would destroy the hidden message.
    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        self.image
            .write_to(&mut writer, ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                StecuError::ImageEncodingError
            })
    }

    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        self.save_to_writer(&mut buf)?;

        Ok(buf.into_inner())
    }
}

impl Persist for Media {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            StecuError::WriteError { source: e }
        })?;
        self.save_to_writer(f)
    }
}

/// true if the data starts like a PNG file
pub fn is_png(data: &[u8]) -> bool {
    matches!(image::guess_format(data), Ok(ImageFormat::Png))
}

/// true for a `.png` file extension, case insensitive
pub fn has_png_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("png"))
        .unwrap_or(false)
}
