use anyhow::Result;
use renumerate_core::preview::render_listing;
use renumerate_core::{list_operation, OutputFormatter, Preview, SortMode};
use std::path::Path;

use crate::cli::OutputFormat;

pub fn handle_list(
    directory: &Path,
    sort: SortMode,
    format: Preview,
    use_color: bool,
    output: OutputFormat,
) -> Result<i32> {
    let result = list_operation(directory, sort)?;

    match (output, format) {
        (OutputFormat::Summary, Preview::Table) if !result.files.is_empty() => {
            print!("{}", render_listing(&result, use_color));
        },
        _ => println!("{}", result.format(output.into()).trim_end()),
    }

    Ok(0)
}
