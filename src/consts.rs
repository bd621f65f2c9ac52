/// Maximum number of lines kept in the status log
pub(crate) const STATUS_LOG_CAPACITY: usize = 12;

/// Status line shown when the input selection is cancelled or empty
pub(crate) const NO_FILE_SELECTED: &str = "No file selected!";

/// Status line shown when the output selection is cancelled or empty
pub(crate) const NO_FOLDER_SELECTED: &str = "No folder selected!";

/// Initial directory for input selection, per direction
pub(crate) const DEFAULT_INPUT_DIR: &str = "./data";

/// Initial directory for output selection, per direction
pub(crate) const DEFAULT_OUTPUT_DIR: &str = "./output";

/// Codec program invoked when nothing else is configured
pub(crate) const DEFAULT_CODEC_PROGRAM: &str = "dgrlin";

/// Placeholders substituted into codec argument templates
pub(crate) const INPUT_PLACEHOLDER: &str = "{input}";
pub(crate) const OUTPUT_PLACEHOLDER: &str = "{output}";
