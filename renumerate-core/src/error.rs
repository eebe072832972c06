use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors the engine reports to its caller.
///
/// Per-file rename failures are not errors at this level; they are recorded in
/// the [`crate::RenameReport`] so one bad file never aborts the batch.
#[derive(Debug, Error)]
pub enum RenumerateError {
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Number {digits} does not fit in a 64-bit integer")]
    NumberOverflow { digits: String },

    #[error("Invalid {field} {value:?}: path separators are not allowed")]
    InvalidAffix { field: &'static str, value: String },

    #[error("Rename plan invariant violated: {0}")]
    PlanInvariant(String),
}

impl RenumerateError {
    /// True for errors caused by the caller's input rather than by the engine.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, Self::ReadDir { .. } | Self::PlanInvariant(_))
    }
}
