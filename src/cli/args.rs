//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::codec::CodecCommand;
use crate::config::{Config, ConfigColorMode};
use crate::consts::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
use crate::core::{ContinuationPolicy, Direction};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "dgrtools")]
#[command(about = "Batch compile and decompile scripts with an external codec", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Output folder for converted files
    #[arg(short, long, global = true, value_name = "DIR")]
    pub(crate) output: Option<PathBuf>,

    /// Codec program to run for each file (default: dgrlin)
    #[arg(long, global = true, value_name = "PROGRAM")]
    pub(crate) codec: Option<String>,

    /// Keep going after a file fails to convert
    #[arg(long, global = true, conflicts_with = "stop_on_error")]
    pub(crate) continue_on_error: bool,

    /// Stop the batch at the first file that fails to convert
    #[arg(long, global = true)]
    pub(crate) stop_on_error: bool,

    /// Print the batch report as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Do not print the status log
    #[arg(short, long, global = true)]
    pub(crate) quiet: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug output (full codec messages, commands run)
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.debug && config.debug {
            self.debug = true;
        }
        if !self.json && config.json {
            self.json = true;
        }
        if !self.quiet && config.quiet {
            self.quiet = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }

        // Only override if CLI is at default
        if let Some(color) = config.color
            && matches!(self.color, ColorMode::Auto)
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if self.codec.is_none() {
            self.codec = config.codec.program.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    /// Codec program from the CLI or config, argument templates from config
    pub(crate) fn codec_command(&self, config: &Config) -> CodecCommand {
        let mut command = CodecCommand::default();
        if let Some(program) = &self.codec {
            command.program = program.clone();
        }
        if let Some(args) = &config.codec.compile_args {
            command.compile_args = args.clone();
        }
        if let Some(args) = &config.codec.decompile_args {
            command.decompile_args = args.clone();
        }
        command
    }

    /// Config overrides the defaults, CLI flags override both directions
    pub(crate) fn policy(&self, config: &Config) -> ContinuationPolicy {
        let mut policy = ContinuationPolicy::default();
        let configured = [
            (Direction::Compile, config.policy.compile_continue_on_error),
            (Direction::Decompile, config.policy.decompile_continue_on_error),
        ];
        for (direction, keep_going) in configured {
            if let Some(keep_going) = keep_going {
                policy.set(direction, keep_going);
            }
        }
        if self.continue_on_error || self.stop_on_error {
            for direction in [Direction::Compile, Direction::Decompile] {
                policy.set(direction, self.continue_on_error);
            }
        }
        policy
    }

    /// Starting (input, output) folders for the pickers
    pub(crate) fn initial_dirs(&self, config: &Config) -> (PathBuf, PathBuf) {
        let input = config
            .input_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR));
        let output = self
            .output
            .clone()
            .or_else(|| config.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
        (input, output)
    }
}
