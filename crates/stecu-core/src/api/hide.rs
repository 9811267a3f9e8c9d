use std::path::{Path, PathBuf};

use log::debug;

use crate::media::has_png_extension;
use crate::{CodecOptions, Media, Persist, Result, StecuError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// The cover image, PNG, JPEG or BMP
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// The stego image to write, must be a `.png` file
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<()> {
        let Some(image) = self.image else {
            return Err(StecuError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StecuError::TargetNotSet);
        };
        let Some(message) = self.message else {
            return Err(StecuError::MissingMessage);
        };
        if !has_png_extension(&output) {
            return Err(StecuError::UnsupportedMedia);
        }

        debug!("hiding {} characters from {image:?} in {output:?}", message.chars().count());
        Media::from_file(&image)?
            .hide_message(&message, &self.options)?
            .save_as(&output)
    }
}
