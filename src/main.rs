mod app;
mod cli;
mod codec;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod picker;
mod utils;

use std::process::ExitCode;

use clap::Parser;

use app::{CommandContext, handle_batch, run_shell};
use cli::Cli;
use codec::CommandCodec;
use config::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::load();
    let cli = cli.with_config(&config);

    utils::init_logging(cli.debug);
    if let Some(path) = &config.source {
        log::info!("loaded config from {}", path.display());
    }

    let codec = CommandCodec::new(cli.codec_command(&config));
    let (input_dir, output_dir) = cli.initial_dirs(&config);
    let ctx = CommandContext {
        cli: &cli,
        codec: &codec,
        policy: cli.policy(&config),
        input_dir,
        output_dir,
    };

    match cli.command.batch() {
        Some((direction, inputs)) => handle_batch(direction, inputs, &ctx),
        None => match run_shell(&ctx) {
            Ok(code) => code,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::from(2)
            }
        },
    }
}
