//! State that outlives a single batch

use std::path::Path;

use crate::picker::Picker;

use super::memory::DirectoryMemory;
use super::runner::BatchRunner;
use super::selection::SelectionController;
use super::status_log::{StatusDisplay, StatusLog};
use super::types::{BatchReport, Direction};

pub(crate) struct Session {
    pub(crate) memory: DirectoryMemory,
    pub(crate) log: StatusLog,
}

impl Session {
    pub(crate) fn new(input_dir: &Path, output_dir: &Path) -> Self {
        Session {
            memory: DirectoryMemory::new(input_dir, output_dir),
            log: StatusLog::new(),
        }
    }

    /// Select, then convert. A cancelled selection leaves one status line
    /// and returns `None` without touching the codec.
    pub(crate) fn run_batch(
        &mut self,
        direction: Direction,
        picker: &dyn Picker,
        runner: &mut BatchRunner<'_>,
        display: &mut dyn StatusDisplay,
    ) -> Option<BatchReport> {
        match SelectionController::new(picker).begin_batch(direction, &mut self.memory) {
            Ok(selection) => Some(runner.run(&selection, direction, &mut self.log, display)),
            Err(cancelled) => {
                self.log.push(cancelled.status());
                display.refresh(&self.log);
                None
            }
        }
    }
}
