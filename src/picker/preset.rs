use std::path::{Path, PathBuf};

use crate::core::{Direction, Selection};
use crate::error::PickerError;

use super::{Picker, expand_input};

/// Answers fixed up front on the command line
pub(crate) struct PresetPicker {
    inputs: Vec<PathBuf>,
    output: Option<PathBuf>,
}

impl PresetPicker {
    pub(crate) fn new(inputs: Vec<PathBuf>, output: Option<PathBuf>) -> Self {
        Self { inputs, output }
    }
}

impl Picker for PresetPicker {
    fn pick_files(
        &self,
        direction: Direction,
        _initial_dir: &Path,
    ) -> Result<Selection<Vec<PathBuf>>, PickerError> {
        let mut files = Vec::new();
        for raw in &self.inputs {
            files.extend(expand_input(raw, direction)?);
        }
        if files.is_empty() {
            return Ok(Selection::Cancelled);
        }
        Ok(Selection::Selected(files))
    }

    fn pick_directory(
        &self,
        _direction: Direction,
        _initial_dir: &Path,
    ) -> Result<Selection<PathBuf>, PickerError> {
        match &self.output {
            Some(dir) if !dir.as_os_str().is_empty() => Ok(Selection::Selected(dir.clone())),
            _ => Ok(Selection::Cancelled),
        }
    }
}
