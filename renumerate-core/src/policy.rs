use crate::error::RenumerateError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the listed files are ordered before numbering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortMode {
    /// Natural order of the full file name
    #[default]
    #[serde(rename = "name")]
    ByName,
    /// Value of the first number in the stem, then natural order
    #[serde(rename = "number")]
    ByNumber,
}

/// How each destination stem is derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamingScheme {
    /// 1, 2, 3, ... in sorted order
    #[default]
    Sequential,
    /// Keep only the digits of the original stem
    NumbersOnly,
    /// Keep only the non-digit characters of the original stem
    TextOnly,
}

/// Whether a run touches the filesystem.
///
/// `DryRun` and `Preview` never mutate anything; they only differ in what the
/// caller is told.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunMode {
    DryRun,
    #[default]
    Preview,
    Execute,
}

impl RunMode {
    pub fn mutates(self) -> bool {
        self == Self::Execute
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ByName => "name",
            Self::ByNumber => "number",
        })
    }
}

impl fmt::Display for NamingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sequential => "sequential",
            Self::NumbersOnly => "numbers-only",
            Self::TextOnly => "text-only",
        })
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::DryRun => "dry-run",
            Self::Preview => "preview",
            Self::Execute => "execute",
        })
    }
}

/// Everything that decides what a batch rename does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingPolicy {
    #[serde(default)]
    pub scheme: NamingScheme,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    #[serde(default)]
    pub sort: SortMode,
    #[serde(default)]
    pub mode: RunMode,
}

impl NamingPolicy {
    pub fn new(scheme: NamingScheme) -> Self {
        Self {
            scheme,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: RunMode) -> Self {
        self.mode = mode;
        self
    }

    /// Reject affixes that would move files out of the directory.
    pub fn validate(&self) -> Result<(), RenumerateError> {
        for (field, value) in [("prefix", &self.prefix), ("suffix", &self.suffix)] {
            if value.contains(['/', '\\']) {
                return Err(RenumerateError::InvalidAffix {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}
