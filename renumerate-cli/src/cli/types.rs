use clap::ValueEnum;
use renumerate_core::{NamingScheme, Preview, SortMode};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum SortArg {
    Name,
    Number,
}

impl From<SortArg> for SortMode {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => Self::ByName,
            SortArg::Number => Self::ByNumber,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum SchemeArg {
    Sequential,
    NumbersOnly,
    TextOnly,
}

impl From<SchemeArg> for NamingScheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Sequential => Self::Sequential,
            SchemeArg::NumbersOnly => Self::NumbersOnly,
            SchemeArg::TextOnly => Self::TextOnly,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PreviewArg {
    List,
    Table,
    /// Counts only
    None,
}

impl From<PreviewArg> for Preview {
    fn from(arg: PreviewArg) -> Self {
        match arg {
            PreviewArg::List => Self::List,
            PreviewArg::Table => Self::Table,
            PreviewArg::None => Self::None,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

impl From<OutputFormat> for renumerate_core::OutputFormat {
    fn from(arg: OutputFormat) -> Self {
        match arg {
            OutputFormat::Summary => Self::Summary,
            OutputFormat::Json => Self::Json,
        }
    }
}
