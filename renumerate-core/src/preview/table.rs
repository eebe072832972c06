use crate::executor::{RenameOutcome, RenameReport};
use crate::output::ListResult;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use std::io::{self, IsTerminal};

fn new_table(headers: &[&str], use_color: bool) -> Table {
    let mut table = Table::new();

    if io::stdout().is_terminal() {
        table.set_content_arrangement(ContentArrangement::Dynamic);
    } else {
        table.set_content_arrangement(ContentArrangement::Disabled);
    }

    // Force styling even in non-TTY environments when colors are explicitly requested
    if use_color {
        table.enforce_styling();
        table.set_header(headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)));
    } else {
        table.set_header(headers.iter().map(Cell::new));
    }

    table
}

fn status_cell(outcome: &RenameOutcome, use_color: bool) -> Cell {
    let (text, color) = match outcome {
        RenameOutcome::Renamed => ("renamed".to_string(), Color::Green),
        RenameOutcome::Unchanged => ("unchanged".to_string(), Color::DarkGrey),
        RenameOutcome::Failed(reason) => (format!("failed: {reason}"), Color::Red),
        RenameOutcome::Skipped(mode) => (mode.to_string(), Color::Yellow),
    };

    if use_color {
        Cell::new(text).fg(color)
    } else {
        Cell::new(text)
    }
}

/// Render a rename report as a table
pub fn render_table(report: &RenameReport, use_color: bool) -> String {
    let mut table = new_table(&["#", "Original", "New", "Status"], use_color);

    for (index, entry) in report.outcomes.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&entry.source),
            Cell::new(&entry.destination),
            status_cell(&entry.outcome, use_color),
        ]);
    }

    format!("{table}\n")
}

/// Render the extracted parts of every listed file as a table
pub fn render_listing(result: &ListResult, use_color: bool) -> String {
    let mut table = new_table(
        &["#", "File", "Number", "Text", "Digits", "Text only", "Trailing"],
        use_color,
    );

    for (index, file) in result.files.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&file.name),
            Cell::new(file.number),
            Cell::new(&file.text),
            Cell::new(&file.digits),
            Cell::new(&file.text_only),
            Cell::new(file.trailing),
        ]);
    }

    format!("{table}\n")
}
