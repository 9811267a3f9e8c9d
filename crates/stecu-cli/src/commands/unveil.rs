use std::path::PathBuf;

use clap::Args;
use stecu_core::CodecOptions;

use crate::CliResult;

/// Unveils a text message from a PNG image and prints it
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains the secret message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// The message will additionally be stored in that folder
    #[arg(short = 'o', long = "out", value_name = "output folder")]
    pub output_folder: Option<PathBuf>,
}

impl UnveilArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let message =
            stecu_core::commands::unveil(&self.media, self.output_folder.as_deref(), &options)?;
        println!("{message}");

        Ok(())
    }
}
