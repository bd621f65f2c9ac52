//! Input and output selection
//!
//! A picker stands in for the file and folder dialogs: it either hands back
//! a value or reports that the user backed out.

mod preset;
mod prompt;

use std::path::{Path, PathBuf};

use crate::core::{Direction, Selection};
use crate::error::PickerError;

pub(crate) use preset::PresetPicker;
pub(crate) use prompt::PromptPicker;

pub(crate) trait Picker {
    /// Choose the files to convert, starting from `initial_dir`
    fn pick_files(
        &self,
        direction: Direction,
        initial_dir: &Path,
    ) -> Result<Selection<Vec<PathBuf>>, PickerError>;

    /// Choose the directory converted files are written to
    fn pick_directory(
        &self,
        direction: Direction,
        initial_dir: &Path,
    ) -> Result<Selection<PathBuf>, PickerError>;
}

fn is_pattern(raw: &str) -> bool {
    raw.contains(['*', '?', '['])
}

/// Turn one user answer into concrete files.
///
/// Existing paths are never read as patterns. Glob patterns expand to the
/// files they match, directories to the files inside that the direction
/// accepts. Anything else is taken as-is and left for the codec to judge.
pub(crate) fn expand_input(raw: &Path, direction: Direction) -> Result<Vec<PathBuf>, PickerError> {
    if !raw.exists()
        && let Some(pattern) = raw.to_str()
        && is_pattern(pattern)
    {
        let paths = glob::glob(pattern).map_err(|e| PickerError::Pattern {
            input: pattern.to_string(),
            message: e.msg.to_string(),
        })?;
        let mut files: Vec<PathBuf> = paths.flatten().filter(|p| p.is_file()).collect();
        files.sort();
        return Ok(files);
    }

    if raw.is_dir() {
        let entries = std::fs::read_dir(raw).map_err(|e| PickerError::ReadDir {
            path: raw.to_path_buf(),
            source: e,
        })?;
        let mut files: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|p| p.is_file() && direction.accepts(p))
            .collect();
        files.sort();
        return Ok(files);
    }

    Ok(vec![raw.to_path_buf()])
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.txt", "a.txt", "e00.lin", "e01.bin", "notes.md"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        fs::create_dir(dir.path().join("nested.txt")).unwrap();
        dir
    }

    #[test]
    fn directory_expands_to_filtered_sorted_files() {
        let dir = fixture();
        let files = expand_input(dir.path(), Direction::Compile).unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("a.txt"), dir.path().join("b.txt")]
        );

        let files = expand_input(dir.path(), Direction::Decompile).unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("e00.lin"), dir.path().join("e01.bin")]
        );
    }

    #[test]
    fn glob_expands_matching_files_only() {
        let dir = fixture();
        let pattern = dir.path().join("*.txt");
        let files = expand_input(&pattern, Direction::Decompile).unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("a.txt"), dir.path().join("b.txt")]
        );
    }

    #[test]
    fn existing_file_with_glob_characters_is_literal() {
        let dir = fixture();
        let file = dir.path().join("e00 [final].txt");
        fs::write(&file, "x").unwrap();
        let files = expand_input(&file, Direction::Compile).unwrap();
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn existing_directory_with_brackets_lists_its_files() {
        let dir = tempfile::tempdir().unwrap();
        let chapter = dir.path().join("chapter [1]");
        fs::create_dir(&chapter).unwrap();
        fs::write(chapter.join("e00.txt"), "x").unwrap();
        let files = expand_input(&chapter, Direction::Compile).unwrap();
        assert_eq!(files, vec![chapter.join("e00.txt")]);
    }

    #[test]
    fn glob_without_matches_is_empty() {
        let dir = fixture();
        let files = expand_input(&dir.path().join("*.xyz"), Direction::Compile).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn invalid_glob_is_an_error() {
        let err = expand_input(Path::new("data/[z-a"), Direction::Compile).unwrap_err();
        assert!(matches!(err, PickerError::Pattern { .. }));
    }

    #[test]
    fn plain_path_passes_through() {
        let files = expand_input(Path::new("missing/e00.txt"), Direction::Compile).unwrap();
        assert_eq!(files, vec![PathBuf::from("missing/e00.txt")]);
    }
}
