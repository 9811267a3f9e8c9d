use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{CodecOptions, Result, StecuError};

/// Name of the file the message is written to inside the output folder
pub const SECRET_MESSAGE_FILE: &str = "secret-message.txt";

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_folder: Option<PathBuf>,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image that contains the message to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the folder where the message will be saved to, optional
    pub fn into_output_folder(mut self, output_folder: impl AsRef<Path>) -> Self {
        self.output_folder = Some(output_folder.as_ref().to_path_buf());
        self
    }

    pub fn use_output_folder(mut self, output_folder: Option<impl AsRef<Path>>) -> Self {
        self.output_folder = output_folder.map(|f| f.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and returns the message
    pub fn execute(self) -> Result<String> {
        let Some(secret_media) = self.secret_media else {
            return Err(StecuError::CarrierNotSet);
        };

        let data = super::read_png_file(&secret_media)?;
        let extraction = crate::extract_with_options(&data, &self.options)?;
        debug!(
            "unveiled {} characters from {secret_media:?}, boundary {:?}",
            extraction.message.chars().count(),
            extraction.boundary
        );

        if let Some(output_folder) = self.output_folder {
            let mut target_file = File::create(output_folder.join(SECRET_MESSAGE_FILE))
                .map_err(|source| StecuError::WriteError { source })?;

            target_file
                .write_all(&latin1_bytes(&extraction.message))
                .map_err(|source| StecuError::WriteError { source })?;
        }

        Ok(extraction.message)
    }
}

/// one byte per character, every unveiled character has an 8-bit code
fn latin1_bytes(message: &str) -> Vec<u8> {
    message.chars().map(|c| c as u32 as u8).collect()
}
