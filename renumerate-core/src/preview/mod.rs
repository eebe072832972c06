mod list;
mod table;

pub use list::render_list;
pub use table::{render_listing, render_table};

use crate::executor::RenameReport;
use crate::policy::RunMode;
use anyhow::Result;
use std::fmt::Write as _;
use std::io::{self, IsTerminal, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview {
    List,
    Table,
    None,
}

impl std::str::FromStr for Preview {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "list" => Ok(Self::List),
            "table" => Ok(Self::Table),
            "none" => Ok(Self::None),
            _ => Err(format!("Invalid preview format: {}", s)),
        }
    }
}

/// Determine whether to use colors based on explicit preference or terminal detection
pub fn should_use_color_with_detector<F>(use_color: Option<bool>, is_terminal: F) -> bool
where
    F: Fn() -> bool,
{
    match use_color {
        Some(explicit_color) => explicit_color,
        None => is_terminal(),
    }
}

/// Determine whether to use colors based on explicit preference or terminal detection
pub fn should_use_color(use_color: Option<bool>) -> bool {
    should_use_color_with_detector(use_color, || io::stdout().is_terminal())
}

/// The `original -> new` mapping in the given format.
pub fn render_mapping(report: &RenameReport, format: Preview, use_color: bool) -> String {
    match format {
        Preview::List => render_list(report, use_color),
        Preview::Table => render_table(report, use_color),
        Preview::None => String::new(),
    }
}

/// Count lines closing a report. Simulated runs say so explicitly.
pub fn render_footer(report: &RenameReport) -> String {
    let mut output = String::new();
    let summary = report.summary;

    match report.mode {
        RunMode::Execute => {
            writeln!(
                output,
                "Successful: {}, Failed: {}",
                summary.successful, summary.failed
            )
            .unwrap();
        },
        RunMode::DryRun => {
            writeln!(
                output,
                "Dry run: {} successful, {} failed (simulated)",
                summary.successful, summary.failed
            )
            .unwrap();
        },
        RunMode::Preview => {
            writeln!(
                output,
                "Preview: {} successful, {} failed (simulated)",
                summary.successful, summary.failed
            )
            .unwrap();
            writeln!(output, "No files were modified.").unwrap();
        },
    }

    output
}

/// Mapping followed by the footer.
pub fn render_report(report: &RenameReport, format: Preview, use_color: bool) -> String {
    let mut output = render_mapping(report, format, use_color);
    output.push_str(&render_footer(report));
    output
}

/// Write a report to stdout
pub fn write_report(report: &RenameReport, format: Preview, use_color: Option<bool>) -> Result<()> {
    let output = render_report(report, format, should_use_color(use_color));
    let mut stdout = io::stdout();
    write!(stdout, "{}", output)?;
    stdout.flush()?;
    Ok(())
}
