use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use log::debug;

use crate::framing::pack_bits;
use crate::media::image::DwtCodec;
use crate::{CodecOptions, Media, Result, StecuError};

pub fn prepare() -> UnveilRawApi {
    UnveilRawApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilRawApi {
    secret_media: Option<PathBuf>,
    destination_file: Option<PathBuf>,
    options: CodecOptions,
}

impl UnveilRawApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the raw file where all data will be saved to
    pub fn into_raw_file(mut self, destination_file: impl AsRef<Path>) -> Self {
        self.destination_file = Some(destination_file.as_ref().to_path_buf());
        self
    }

    /// Dumps every diagonal coefficient bit, packed MSB first, no markers are interpreted
    pub fn execute(self) -> Result<()> {
        let Some(secret_media) = self.secret_media else {
            return Err(StecuError::CarrierNotSet);
        };
        let Some(destination_file) = self.destination_file else {
            return Err(StecuError::TargetNotSet);
        };

        let media = Media::from_bytes(&super::read_png_file(&secret_media)?)?;
        let bits = DwtCodec::unveil_raw(media.image(), &self.options);
        let content = pack_bits(&bits)?;
        debug!("dumping {} raw bits to {destination_file:?}", bits.len());

        let mut destination_file =
            File::create(destination_file).map_err(|source| StecuError::WriteError { source })?;

        destination_file
            .write_all(content.as_slice())
            .map_err(|source| StecuError::WriteError { source })
    }
}
