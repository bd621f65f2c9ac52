use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use dialoguer::Input;

use crate::core::{Direction, Selection};
use crate::error::PickerError;

use super::{Picker, expand_input};

/// Asks on the terminal, prefilled with the remembered directory
pub(crate) struct PromptPicker;

fn initial_text(dir: &Path) -> String {
    let mut text = dir.display().to_string();
    if !text.ends_with(MAIN_SEPARATOR) {
        text.push(MAIN_SEPARATOR);
    }
    text
}

fn ask(prompt: &str, initial: String) -> Result<String, PickerError> {
    let answer: String = Input::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?;
    Ok(answer.trim().to_string())
}

impl Picker for PromptPicker {
    fn pick_files(
        &self,
        direction: Direction,
        initial_dir: &Path,
    ) -> Result<Selection<Vec<PathBuf>>, PickerError> {
        log::info!("opening file prompt");
        let filters = direction
            .extensions()
            .iter()
            .map(|ext| format!("*.{ext}"))
            .collect::<Vec<_>>()
            .join(", ");
        let answer = ask(
            &format!("{} (file, folder or pattern; {filters})", direction.input_title()),
            initial_text(initial_dir),
        )?;
        if answer.is_empty() {
            return Ok(Selection::Cancelled);
        }

        let files = expand_input(Path::new(&answer), direction)?;
        if files.is_empty() {
            return Ok(Selection::Cancelled);
        }
        Ok(Selection::Selected(files))
    }

    fn pick_directory(
        &self,
        direction: Direction,
        initial_dir: &Path,
    ) -> Result<Selection<PathBuf>, PickerError> {
        log::info!("opening folder prompt");
        let answer = ask(direction.output_title(), initial_dir.display().to_string())?;
        if answer.is_empty() {
            return Ok(Selection::Cancelled);
        }
        Ok(Selection::Selected(PathBuf::from(answer)))
    }
}
