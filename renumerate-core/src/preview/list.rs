use crate::executor::{RenameOutcome, RenameReport};
use nu_ansi_term::{Color as AnsiColor, Style};
use std::fmt::Write;

/// Render one `original -> new` line per entry.
pub fn render_list(report: &RenameReport, use_color: bool) -> String {
    let mut output = String::new();

    for entry in &report.outcomes {
        let line = match &entry.outcome {
            RenameOutcome::Unchanged => {
                let text = format!("{} (unchanged)", entry.source);
                if use_color {
                    Style::new().dimmed().paint(text).to_string()
                } else {
                    text
                }
            },
            RenameOutcome::Failed(reason) => {
                if use_color {
                    format!(
                        "{} -> {} {}",
                        entry.source,
                        entry.destination,
                        AnsiColor::Red.bold().paint(format!("FAILED: {reason}"))
                    )
                } else {
                    format!("{} -> {} FAILED: {}", entry.source, entry.destination, reason)
                }
            },
            RenameOutcome::Renamed | RenameOutcome::Skipped(_) => {
                if use_color {
                    format!(
                        "{} -> {}",
                        AnsiColor::Red.paint(&entry.source),
                        AnsiColor::Green.paint(&entry.destination)
                    )
                } else {
                    format!("{} -> {}", entry.source, entry.destination)
                }
            },
        };
        writeln!(output, "{line}").unwrap();
    }

    output
}
