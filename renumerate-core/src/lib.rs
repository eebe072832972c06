#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod executor;
pub mod extract;
pub mod listing;
pub mod operations;
pub mod output;
pub mod plan;
pub mod policy;
pub mod preview;
pub mod sort_key;
pub mod tokenizer;

pub use config::Config;
pub use error::RenumerateError;
pub use executor::{execute, EntryOutcome, RenameOutcome, RenameReport, RenameSummary};
pub use extract::{
    extract_number_and_text, extract_number_at_end, extract_numbers_only, extract_text_only,
    leading_number_digits, NumberTextSplit,
};
pub use listing::{list_files, sort_files, split_name, FileEntry};
pub use operations::{list_operation, plan_operation, rename_operation};
pub use output::{
    ListResult, ListedFile, OutputFormat, OutputFormatter, RenameResult, VersionResult,
};
pub use plan::{build_plan, PlannedRename, RenamePlan};
pub use policy::{NamingPolicy, NamingScheme, RunMode, SortMode};
pub use preview::{render_report, write_report, Preview};
pub use sort_key::{natural_cmp, natural_sort_key, KeyPart, SortKey};
pub use tokenizer::{runs, Run, RunKind, Runs};
