//! Codec abstraction layer
//!
//! The batch workflow only knows how to ask for one file to be converted.
//! What "convert" means is up to the gateway behind this trait.

mod command;

use std::path::Path;

use crate::core::Direction;
use crate::error::ConversionError;

pub(crate) use command::{CodecCommand, CommandCodec};

/// Converts a single input file into `output_dir`
pub(crate) trait CodecGateway {
    /// Short name for log messages
    fn name(&self) -> &str;

    fn convert(
        &self,
        direction: Direction,
        input: &Path,
        output_dir: &Path,
    ) -> Result<(), ConversionError>;
}
