use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::types::{OutputFormat, PreviewArg, SchemeArg, SortArg};

/// Rename the files of a directory in natural order
#[derive(Parser, Debug)]
#[command(name = "renumerate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR", value_parser = clap::builder::BoolishValueParser::new())]
    pub no_color: bool,

    /// Run as if started in <path> instead of the current working directory
    #[arg(short = 'C', id = "change_dir", global = true, value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Assume yes for all prompts
    #[arg(short = 'y', long = "yes", global = true, env = "RENUMERATE_YES", value_parser = clap::builder::BoolishValueParser::new())]
    pub yes: bool,
}

/// How files are ordered and named
#[derive(Args, Debug, Clone)]
pub struct NamingArgs {
    /// File order used for numbering [default: name]
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    /// How new names are derived [default: sequential]
    #[arg(long, value_enum)]
    pub scheme: Option<SchemeArg>,

    /// Text placed before every new stem
    #[arg(long, allow_hyphen_values = true)]
    pub prefix: Option<String>,

    /// Text placed after every new stem, before the extension
    #[arg(long, allow_hyphen_values = true)]
    pub suffix: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rename every file directly inside a directory
    Rename {
        /// Directory whose files are renamed
        directory: PathBuf,

        #[command(flatten)]
        naming: NamingArgs,

        /// Show what would happen and report it as a dry run
        #[arg(long)]
        dry_run: bool,

        /// Show the mapping without renaming anything (wins over --dry-run)
        #[arg(long = "preview")]
        preview_only: bool,

        /// Mapping format
        #[arg(long, value_enum)]
        format: Option<PreviewArg>,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,

        /// Only print the counts
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Show how the files of a directory are ordered and what each name contains
    List {
        /// Directory to inspect
        directory: PathBuf,

        /// File order [default: name]
        #[arg(long, value_enum)]
        sort: Option<SortArg>,

        /// Show a table instead of one line per file
        #[arg(long, value_enum)]
        format: Option<PreviewArg>,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// Show version information
    Version {
        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
