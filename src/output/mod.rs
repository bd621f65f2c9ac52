mod format;
mod report;
mod status;

pub(crate) use report::{cancelled_json, print_report, report_json};
pub(crate) use status::{LineDisplay, PanelDisplay, panel_text};
