//! Runs one batch: every input through the codec, one status line each

use std::path::Path;
use std::time::Instant;

use crate::codec::CodecGateway;
use crate::error::{ConversionError, UnexpectedError};

use super::status_log::{StatusDisplay, StatusLog};
use super::types::{BatchReport, BatchSelection, Direction, ItemOutcome, ItemReport, StatusEntry};

/// Whether a codec failure lets the rest of the batch run, per direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ContinuationPolicy {
    pub(crate) compile: bool,
    pub(crate) decompile: bool,
}

impl Default for ContinuationPolicy {
    fn default() -> Self {
        ContinuationPolicy {
            compile: true,
            decompile: false,
        }
    }
}

impl ContinuationPolicy {
    pub(crate) fn continue_on_error(&self, direction: Direction) -> bool {
        match direction {
            Direction::Compile => self.compile,
            Direction::Decompile => self.decompile,
        }
    }

    pub(crate) fn set(&mut self, direction: Direction, continue_on_error: bool) {
        match direction {
            Direction::Compile => self.compile = continue_on_error,
            Direction::Decompile => self.decompile = continue_on_error,
        }
    }
}

/// Operator-facing channel for failures the user never sees in full
pub(crate) trait DiagnosticSink {
    /// Full text of a codec rejection; only its first line reached the status log
    fn codec_failure(&mut self, input: &Path, error: &ConversionError);

    fn unexpected_failure(&mut self, input: &Path, error: &UnexpectedError);
}

/// Sends diagnostics to the `log` facade
pub(crate) struct LogDiagnostics;

impl DiagnosticSink for LogDiagnostics {
    fn codec_failure(&mut self, input: &Path, error: &ConversionError) {
        log::debug!("codec rejected {}:\n{error}", input.display());
    }

    fn unexpected_failure(&mut self, input: &Path, error: &UnexpectedError) {
        log::error!("unexpected failure on {}: {error}", input.display());
    }
}

pub(crate) struct BatchRunner<'a> {
    codec: &'a dyn CodecGateway,
    diagnostics: &'a mut dyn DiagnosticSink,
    policy: ContinuationPolicy,
}

impl<'a> BatchRunner<'a> {
    pub(crate) fn new(
        codec: &'a dyn CodecGateway,
        diagnostics: &'a mut dyn DiagnosticSink,
        policy: ContinuationPolicy,
    ) -> Self {
        Self {
            codec,
            diagnostics,
            policy,
        }
    }

    /// Convert `selection.inputs` in order, pushing one status line per
    /// outcome the user should see. Returns the full report.
    pub(crate) fn run(
        &mut self,
        selection: &BatchSelection,
        direction: Direction,
        log: &mut StatusLog,
        display: &mut dyn StatusDisplay,
    ) -> BatchReport {
        let start = Instant::now();
        let mut report = BatchReport::new(direction, &selection.output_dir);
        let keep_going = self.policy.continue_on_error(direction);

        log::info!(
            "{direction} batch: {} file(s) -> {} via {}",
            selection.inputs.len(),
            selection.output_dir.display(),
            self.codec.name()
        );

        let mut inputs = selection.inputs.iter();
        for input in inputs.by_ref() {
            let (outcome, entry) =
                match self
                    .codec
                    .convert(direction, input, &selection.output_dir)
                {
                    Ok(()) => (
                        ItemOutcome::Converted,
                        Some(StatusEntry::converted(direction, input)),
                    ),
                    Err(ConversionError::Unexpected(e)) => {
                        self.diagnostics.unexpected_failure(input, &e);
                        (
                            ItemOutcome::Unexpected {
                                detail: e.to_string(),
                            },
                            None,
                        )
                    }
                    Err(e) => {
                        self.diagnostics.codec_failure(input, &e);
                        let summary = e.summary();
                        (
                            ItemOutcome::Failed {
                                summary: summary.clone(),
                            },
                            Some(StatusEntry::new(summary)),
                        )
                    }
                };

            let stop = matches!(outcome, ItemOutcome::Failed { .. }) && !keep_going;
            report.items.push(ItemReport {
                input: input.clone(),
                outcome,
            });
            if let Some(entry) = entry {
                log.push(entry.clone());
                report.entries.push(entry);
                display.refresh(log);
            }
            if stop {
                break;
            }
        }

        report.skipped = inputs.cloned().collect();
        if !report.skipped.is_empty() {
            log::warn!(
                "{direction} batch stopped after a codec failure; {} file(s) not attempted",
                report.skipped.len()
            );
        }
        report.elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        report
    }
}
