//! CLI subcommand definitions

use std::path::PathBuf;

use clap::Subcommand;

use crate::core::Direction;

/// Main CLI commands
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Compile script text files into binaries
    Compile {
        /// Files, folders or glob patterns to compile (*.txt)
        inputs: Vec<PathBuf>,
    },
    /// Decompile binaries back into script text
    Decompile {
        /// Files, folders or glob patterns to decompile (*.lin, *.bin)
        inputs: Vec<PathBuf>,
    },
    /// Interactive session that remembers folders between batches
    Shell,
}

impl Commands {
    /// Direction and inputs for one-shot batch commands
    pub(crate) fn batch(&self) -> Option<(Direction, &[PathBuf])> {
        match self {
            Commands::Compile { inputs } => Some((Direction::Compile, inputs)),
            Commands::Decompile { inputs } => Some((Direction::Decompile, inputs)),
            Commands::Shell => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_commands_map_to_direction() {
        let cmd = Commands::Compile {
            inputs: vec![PathBuf::from("a.txt")],
        };
        let (direction, inputs) = cmd.batch().unwrap();
        assert_eq!(direction, Direction::Compile);
        assert_eq!(inputs, [PathBuf::from("a.txt")]);

        let cmd = Commands::Decompile { inputs: Vec::new() };
        assert_eq!(cmd.batch().unwrap().0, Direction::Decompile);
        assert!(Commands::Shell.batch().is_none());
    }
}
