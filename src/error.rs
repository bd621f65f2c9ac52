use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Terminal error: {0}")]
    Terminal(#[from] PickerError),
}

/// Failure of a single codec invocation
#[derive(Debug, Error)]
pub(crate) enum ConversionError {
    /// The codec ran and rejected the input. `message` may span several lines.
    #[error("{message}")]
    Codec { message: String },

    #[error(transparent)]
    Unexpected(#[from] UnexpectedError),
}

impl ConversionError {
    pub(crate) fn codec(message: impl Into<String>) -> Self {
        ConversionError::Codec {
            message: message.into(),
        }
    }

    /// First line of the message, the only part shown to the user
    pub(crate) fn summary(&self) -> String {
        first_line(&self.to_string()).to_string()
    }
}

/// Anything that went wrong around the codec rather than inside it
#[derive(Debug, Error)]
pub(crate) enum UnexpectedError {
    #[error("Codec program not found: {program}")]
    NotFound { program: String },

    #[error("Failed to run codec {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Codec {program} was terminated without an exit status")]
    Terminated { program: String },
}

#[derive(Debug, Error)]
pub(crate) enum PickerError {
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid pattern \"{input}\": {message}")]
    Pattern { input: String, message: String },

    #[error("Failed to read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub(crate) fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or("")
}
