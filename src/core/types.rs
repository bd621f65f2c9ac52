//! Core data types for a conversion batch
//!
//! Selections come in from the pickers, reports go out to the output layer.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;

/// Which way a batch converts its inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Direction {
    /// Script text to binary
    Compile,
    /// Binary back to script text
    Decompile,
}

impl Direction {
    pub(crate) fn name(self) -> &'static str {
        match self {
            Direction::Compile => "compile",
            Direction::Decompile => "decompile",
        }
    }

    /// Past tense used in the success status line
    pub(crate) fn verb(self) -> &'static str {
        match self {
            Direction::Compile => "compiled",
            Direction::Decompile => "decompiled",
        }
    }

    pub(crate) fn input_title(self) -> &'static str {
        match self {
            Direction::Compile => "Select a text file!",
            Direction::Decompile => "Select a binary!",
        }
    }

    pub(crate) fn output_title(self) -> &'static str {
        "Select an output folder!"
    }

    /// File extensions offered when a directory is picked as input
    pub(crate) fn extensions(self) -> &'static [&'static str] {
        match self {
            Direction::Compile => &["txt"],
            Direction::Decompile => &["lin", "bin"],
        }
    }

    pub(crate) fn accepts(self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                self.extensions()
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a picker call: a value, or the user backed out
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Selection<T> {
    Selected(T),
    Cancelled,
}

/// Validated inputs and output directory for one batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BatchSelection {
    pub(crate) inputs: Vec<PathBuf>,
    pub(crate) output_dir: PathBuf,
}

/// One line of the status log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub(crate) struct StatusEntry(String);

impl StatusEntry {
    pub(crate) fn new(line: impl Into<String>) -> Self {
        StatusEntry(line.into())
    }

    pub(crate) fn converted(direction: Direction, input: &Path) -> Self {
        StatusEntry(format!("File {}: {}", direction.verb(), input.display()))
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StatusEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What happened to one attempted input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub(crate) enum ItemOutcome {
    Converted,
    Failed { summary: String },
    /// Reported to diagnostics only, never to the status log
    Unexpected { detail: String },
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ItemReport {
    pub(crate) input: PathBuf,
    #[serde(flatten)]
    pub(crate) outcome: ItemOutcome,
}

/// Everything one batch did, in order
#[derive(Debug, Clone, Serialize)]
pub(crate) struct BatchReport {
    pub(crate) direction: Direction,
    pub(crate) output_dir: PathBuf,
    pub(crate) started_at: DateTime<Local>,
    pub(crate) elapsed_ms: f64,
    pub(crate) items: Vec<ItemReport>,
    /// Inputs never attempted because the batch stopped early
    pub(crate) skipped: Vec<PathBuf>,
    /// Status lines in the order they were pushed
    pub(crate) entries: Vec<StatusEntry>,
}

impl BatchReport {
    pub(crate) fn new(direction: Direction, output_dir: &Path) -> Self {
        BatchReport {
            direction,
            output_dir: output_dir.to_path_buf(),
            started_at: Local::now(),
            elapsed_ms: 0.0,
            items: Vec::new(),
            skipped: Vec::new(),
            entries: Vec::new(),
        }
    }

    fn count(&self, pred: impl Fn(&ItemOutcome) -> bool) -> usize {
        self.items.iter().filter(|i| pred(&i.outcome)).count()
    }

    pub(crate) fn converted(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Converted))
    }

    pub(crate) fn failed(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Failed { .. }))
    }

    pub(crate) fn unexpected(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Unexpected { .. }))
    }

    /// True when every selected input was attempted and converted
    pub(crate) fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.converted() == self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converted_entry_format() {
        let e = StatusEntry::converted(Direction::Compile, Path::new("data/e00.txt"));
        assert_eq!(e.as_str(), "File compiled: data/e00.txt");
        let e = StatusEntry::converted(Direction::Decompile, Path::new("data/e00.lin"));
        assert_eq!(e.as_str(), "File decompiled: data/e00.lin");
    }

    #[test]
    fn direction_filters() {
        assert!(Direction::Compile.accepts(Path::new("a/script.txt")));
        assert!(!Direction::Compile.accepts(Path::new("a/script.lin")));
        assert!(Direction::Decompile.accepts(Path::new("e00.LIN")));
        assert!(Direction::Decompile.accepts(Path::new("e00.bin")));
        assert!(!Direction::Decompile.accepts(Path::new("README")));
    }

    #[test]
    fn report_counts() {
        let mut report = BatchReport::new(Direction::Compile, Path::new("out"));
        report.items.push(ItemReport {
            input: PathBuf::from("a.txt"),
            outcome: ItemOutcome::Converted,
        });
        report.items.push(ItemReport {
            input: PathBuf::from("b.txt"),
            outcome: ItemOutcome::Failed {
                summary: "bad".to_string(),
            },
        });
        report.items.push(ItemReport {
            input: PathBuf::from("c.txt"),
            outcome: ItemOutcome::Unexpected {
                detail: "gone".to_string(),
            },
        });
        assert_eq!(report.converted(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.unexpected(), 1);
        assert!(!report.is_clean());
    }

    #[test]
    fn empty_report_is_clean() {
        let report = BatchReport::new(Direction::Decompile, Path::new("out"));
        assert!(report.is_clean());
    }

    #[test]
    fn item_outcome_serializes_tagged() {
        let item = ItemReport {
            input: PathBuf::from("b.txt"),
            outcome: ItemOutcome::Failed {
                summary: "bad".to_string(),
            },
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["input"], "b.txt");
        assert_eq!(json["status"], "failed");
        assert_eq!(json["summary"], "bad");
    }
}
