use crate::error::RenumerateError;
use crate::extract::leading_number_digits;
use crate::policy::SortMode;
use crate::sort_key::{natural_sort_key, significant_digits};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// One file considered for renaming.
///
/// `name == stem + extension` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FileEntry {
    pub path: PathBuf,
    pub name: String,
    pub stem: String,
    /// Includes the leading `.`; empty when the name has no extension
    pub extension: String,
}

impl FileEntry {
    /// Build an entry from a file path. Returns `None` when the file name is
    /// missing or not valid UTF-8.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let name = path.file_name()?.to_str()?.to_string();
        let (stem, extension) = split_name(&name);
        let (stem, extension) = (stem.to_string(), extension.to_string());

        Some(Self {
            path,
            name,
            stem,
            extension,
        })
    }

    /// Path of a sibling file called `name` in the same directory.
    pub fn sibling(&self, name: &str) -> PathBuf {
        self.path.with_file_name(name)
    }
}

/// Split a file name into stem and extension, following the same rules as
/// [`Path::extension`]: the extension starts at the last `.`, unless that dot
/// is the first character (`.bashrc` has no extension).
pub fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(0) | None => (name, ""),
        Some(dot) => name.split_at(dot),
    }
}

/// List the regular files directly inside `directory`.
///
/// Subdirectories are neither listed nor entered. Symlinks are listed when they
/// point at a regular file. The order is whatever the filesystem reports.
pub fn list_files(directory: &Path) -> Result<Vec<FileEntry>, RenumerateError> {
    let metadata = match fs::metadata(directory) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(RenumerateError::DirectoryNotFound(directory.to_path_buf()));
        },
        Err(e) => {
            return Err(RenumerateError::ReadDir {
                path: directory.to_path_buf(),
                source: e,
            });
        },
    };

    if !metadata.is_dir() {
        return Err(RenumerateError::NotADirectory(directory.to_path_buf()));
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(directory).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| RenumerateError::ReadDir {
            path: directory.to_path_buf(),
            source: e.into(),
        })?;

        let file_type = entry.file_type();
        let is_file = file_type.is_file() || (file_type.is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }

        match FileEntry::from_path(entry.path()) {
            Some(file) => entries.push(file),
            None => warn!(
                path = %entry.path().display(),
                "Skipping file whose name is not valid UTF-8"
            ),
        }
    }

    debug!(
        directory = %directory.display(),
        count = entries.len(),
        "Listed files"
    );
    Ok(entries)
}

/// Order files for numbering.
///
/// `ByNumber` compares the first number of each stem by value (a missing number
/// counts as 0) and falls back to natural name order for ties.
pub fn sort_files(mut entries: Vec<FileEntry>, mode: SortMode) -> Vec<FileEntry> {
    match mode {
        SortMode::ByName => entries.sort_by_cached_key(|e| natural_sort_key(&e.name)),
        SortMode::ByNumber => entries.sort_by_cached_key(|e| {
            let digits = significant_digits(leading_number_digits(&e.stem).unwrap_or_default());
            (digits.len(), digits.to_string(), natural_sort_key(&e.name))
        }),
    }
    entries
}
