use comfy_table::Color;

use crate::core::{BatchReport, ItemOutcome, StatusEntry};

use super::format::{create_styled_table, header_cell, plural, styled_cell};

fn outcome_cell_text(outcome: &ItemOutcome, verb: &str) -> (String, Color) {
    match outcome {
        ItemOutcome::Converted => (verb.to_string(), Color::Green),
        ItemOutcome::Failed { summary } => (format!("failed: {summary}"), Color::Red),
        ItemOutcome::Unexpected { .. } => ("error (see log)".to_string(), Color::Yellow),
    }
}

/// One-line tally of a batch, e.g. "2 files compiled, 1 failed, 1 skipped"
pub(crate) fn summary_line(report: &BatchReport) -> String {
    let mut parts = vec![format!(
        "{} {}",
        plural(report.converted(), "file"),
        report.direction.verb()
    )];
    if report.failed() > 0 {
        parts.push(format!("{} failed", report.failed()));
    }
    if report.unexpected() > 0 {
        parts.push(format!("{} errored", report.unexpected()));
    }
    if !report.skipped.is_empty() {
        parts.push(format!("{} skipped", report.skipped.len()));
    }
    parts.join(", ")
}

pub(crate) fn render_report_table(report: &BatchReport, use_color: bool) -> String {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("#", use_color),
        header_cell("Input", use_color),
        header_cell("Result", use_color),
    ]);

    let verb = report.direction.verb();
    for (i, item) in report.items.iter().enumerate() {
        let (text, color) = outcome_cell_text(&item.outcome, verb);
        table.add_row(vec![
            styled_cell(&(i + 1).to_string(), None, use_color),
            styled_cell(&item.input.display().to_string(), None, use_color),
            styled_cell(&text, Some(color), use_color),
        ]);
    }
    let attempted = report.items.len();
    for (i, input) in report.skipped.iter().enumerate() {
        table.add_row(vec![
            styled_cell(&(attempted + i + 1).to_string(), None, use_color),
            styled_cell(&input.display().to_string(), None, use_color),
            styled_cell("skipped", Some(Color::DarkGrey), use_color),
        ]);
    }
    table.to_string()
}

/// Print the table followed by the summary line with timing
pub(crate) fn print_report(report: &BatchReport, use_color: bool) {
    if report.items.is_empty() && report.skipped.is_empty() {
        return;
    }
    println!("{}", render_report_table(report, use_color));
    let stats_text = summary_line(report);
    if use_color {
        println!("\n  {} | \x1b[36m{:.0}ms\x1b[0m\n", stats_text, report.elapsed_ms);
    } else {
        println!("\n  {} | {:.0}ms\n", stats_text, report.elapsed_ms);
    }
}

pub(crate) fn report_json(report: &BatchReport) -> String {
    let value = serde_json::json!({
        "direction": report.direction,
        "output_dir": report.output_dir,
        "started_at": report.started_at.to_rfc3339(),
        "elapsed_ms": report.elapsed_ms,
        "converted": report.converted(),
        "failed": report.failed(),
        "unexpected": report.unexpected(),
        "items": report.items,
        "skipped": report.skipped,
        "entries": report.entries,
    });
    serde_json::to_string_pretty(&value).unwrap_or_default()
}

/// JSON emitted when selection was cancelled and nothing ran
pub(crate) fn cancelled_json(entry: &StatusEntry) -> String {
    let value = serde_json::json!({
        "cancelled": true,
        "entries": [entry],
    });
    serde_json::to_string_pretty(&value).unwrap_or_default()
}
