//! Core module - the batch conversion workflow

mod memory;
mod runner;
mod selection;
mod session;
mod status_log;
mod types;

pub(crate) use runner::{BatchRunner, ContinuationPolicy, LogDiagnostics};
pub(crate) use session::Session;
pub(crate) use status_log::{NoDisplay, StatusDisplay, StatusLog};
pub(crate) use types::{BatchReport, Direction, ItemOutcome, Selection, StatusEntry};

#[cfg(test)]
pub(crate) use types::ItemReport;
