//! High-level operations that correspond to CLI commands
//!
//! These modules contain the core logic for each renumerate operation,
//! separated from CLI concerns like argument parsing and output formatting.

pub mod list;
pub mod rename;

pub use list::list_operation;
pub use rename::{plan_operation, rename_operation};
