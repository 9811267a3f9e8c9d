use std::path::PathBuf;

use clap::Args;
use stecu_core::CodecOptions;

use crate::CliResult;

/// Hides a text message in an image, the result is always a PNG
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Cover image such as PNG, JPEG or BMP, used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// A text message that will be hidden, 8-bit characters only
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        stecu_core::commands::hide(&self.media, &self.write_to_file, &self.message, &options)
    }
}
