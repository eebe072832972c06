use anyhow::Result;
use renumerate_core::preview::{render_footer, render_mapping};
use renumerate_core::{
    execute, plan_operation, rename_operation, write_report, NamingPolicy, OutputFormatter,
    Preview, RenameResult, RunMode,
};
use std::io::{self, IsTerminal};
use std::path::Path;

use crate::cli::OutputFormat;
use crate::confirm::get_user_confirmation;

/// Exit code when at least one file could not be renamed
const EXIT_PARTIAL_FAILURE: i32 = 1;
const EXIT_INVALID_INPUT: i32 = 2;

pub fn handle_rename(
    directory: &Path,
    policy: &NamingPolicy,
    format: Preview,
    auto_approve: bool,
    use_color: bool,
    output: OutputFormat,
    quiet: bool,
) -> Result<i32> {
    let result = if policy.mode.mutates() && !auto_approve {
        // Safety check: Non-TTY without auto-approve should exit with error
        if !io::stdout().is_terminal() || output == OutputFormat::Json {
            eprintln!(
                "Error: Cannot prompt for confirmation in non-interactive mode. Use --yes to apply the renames."
            );
            return Ok(EXIT_INVALID_INPUT);
        }

        let plan = plan_operation(directory, policy)?;
        if plan.is_empty() {
            println!("No files to rename in {}", directory.display());
            return Ok(0);
        }

        let preview = execute(&plan, RunMode::Preview);
        print!("{}", render_mapping(&preview, format, use_color));

        if !get_user_confirmation()? {
            println!("Aborted.");
            return Ok(0);
        }

        RenameResult {
            directory: directory.to_path_buf(),
            policy: policy.clone(),
            report: execute(&plan, RunMode::Execute),
        }
    } else {
        rename_operation(directory, policy)?
    };

    match output {
        OutputFormat::Json => println!("{}", result.format(output.into())),
        OutputFormat::Summary if quiet => print!("{}", render_footer(&result.report)),
        OutputFormat::Summary => write_report(&result.report, format, Some(use_color))?,
    }

    if result.report.has_failures() {
        Ok(EXIT_PARTIAL_FAILURE)
    } else {
        Ok(0)
    }
}
