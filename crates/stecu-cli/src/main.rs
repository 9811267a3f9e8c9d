use clap::Parser;
use log::debug;
use stecu_core::{CodecOptions, StecuError};

use crate::cli::{CliArgs, Commands};

mod cli;
mod commands;

pub type CliResult<T> = Result<T, StecuError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let options = CodecOptions::default().with_channel(args.channel.into());
    debug!("codec options: {options:?}");

    match args.command {
        Commands::Hide(hide) => hide.run(options),
        Commands::Unveil(unveil) => unveil.run(options),
        Commands::UnveilRaw(unveil_raw) => unveil_raw.run(options),
    }
}
