//! Turns a user action into a validated (inputs, output directory) pair

use crate::consts::{NO_FILE_SELECTED, NO_FOLDER_SELECTED};
use crate::picker::Picker;

use super::memory::DirectoryMemory;
use super::types::{BatchSelection, Direction, Selection, StatusEntry};

/// Which step the user backed out of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Cancelled {
    Input,
    Output,
}

impl Cancelled {
    pub(crate) fn status(self) -> StatusEntry {
        match self {
            Cancelled::Input => StatusEntry::new(NO_FILE_SELECTED),
            Cancelled::Output => StatusEntry::new(NO_FOLDER_SELECTED),
        }
    }
}

pub(crate) struct SelectionController<'a> {
    picker: &'a dyn Picker,
}

impl<'a> SelectionController<'a> {
    pub(crate) fn new(picker: &'a dyn Picker) -> Self {
        Self { picker }
    }

    /// Ask for inputs, then for an output directory.
    ///
    /// `memory` seeds both prompts and is only updated from non-empty
    /// answers. A picker error counts as a cancellation.
    pub(crate) fn begin_batch(
        &self,
        direction: Direction,
        memory: &mut DirectoryMemory,
    ) -> Result<BatchSelection, Cancelled> {
        let initial = memory.get(direction).input.clone();
        let inputs = match self.picker.pick_files(direction, &initial) {
            Ok(Selection::Selected(files)) if !files.is_empty() => files,
            Ok(_) => {
                log::warn!("user did not select file");
                return Err(Cancelled::Input);
            }
            Err(e) => {
                log::warn!("file selection failed: {e}");
                return Err(Cancelled::Input);
            }
        };
        memory.remember_input(direction, &inputs[0]);

        let initial = memory.get(direction).output.clone();
        let output_dir = match self.picker.pick_directory(direction, &initial) {
            Ok(Selection::Selected(dir)) if !dir.as_os_str().is_empty() => dir,
            Ok(_) => {
                log::warn!("user did not select output folder");
                return Err(Cancelled::Output);
            }
            Err(e) => {
                log::warn!("folder selection failed: {e}");
                return Err(Cancelled::Output);
            }
        };
        memory.remember_output(direction, &output_dir);

        Ok(BatchSelection { inputs, output_dir })
    }
}
