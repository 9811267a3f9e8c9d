use std::path::Path;

use crate::{api, CodecOptions, Result};

pub fn hide(carrier: &Path, output: &Path, message: &str, opts: &CodecOptions) -> Result<()> {
    api::hide::prepare()
        .with_image(carrier)
        .with_output(output)
        .with_message(message)
        .with_options(opts.clone())
        .execute()
}

/// unveils the message and, if a folder is given, stores it there as `secret-message.txt`
pub fn unveil(
    secret_media: &Path,
    output_folder: Option<&Path>,
    opts: &CodecOptions,
) -> Result<String> {
    api::unveil::prepare()
        .from_secret_file(secret_media)
        .use_output_folder(output_folder)
        .with_options(opts.clone())
        .execute()
}

/// unveil all raw data, no markers are interpreted.
/// Just a raw binary dump of the bits gathered from the diagonal subband.
pub fn unveil_raw(secret_media: &Path, destination_file: &Path, opts: &CodecOptions) -> Result<()> {
    api::unveil_raw::prepare()
        .from_secret_file(secret_media)
        .into_raw_file(destination_file)
        .with_options(opts.clone())
        .execute()
}
