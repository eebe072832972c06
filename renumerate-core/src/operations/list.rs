use crate::extract::{
    extract_number_and_text, extract_number_at_end, extract_numbers_only, extract_text_only,
};
use crate::listing::{list_files, sort_files, FileEntry};
use crate::output::{ListResult, ListedFile};
use crate::policy::SortMode;
use anyhow::{Context, Result};
use std::path::Path;

fn listed_file(entry: &FileEntry) -> Result<ListedFile> {
    let split = extract_number_and_text(&entry.stem)
        .with_context(|| format!("Cannot read the number in {}", entry.name))?;
    let trailing = extract_number_at_end(&entry.stem)
        .with_context(|| format!("Cannot read the trailing number in {}", entry.name))?;

    Ok(ListedFile {
        name: entry.name.clone(),
        number: split.number,
        text: split.text,
        digits: extract_numbers_only(&entry.stem),
        text_only: extract_text_only(&entry.stem),
        trailing,
    })
}

/// List operation - the files of `directory` in `sort` order, with the parts
/// the naming schemes would see in each stem
pub fn list_operation(directory: &Path, sort: SortMode) -> Result<ListResult> {
    let files = list_files(directory)
        .with_context(|| format!("Failed to list files in {}", directory.display()))?;

    let files = sort_files(files, sort)
        .iter()
        .map(listed_file)
        .collect::<Result<Vec<_>>>()?;

    Ok(ListResult {
        directory: directory.to_path_buf(),
        sort,
        files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenumerateError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_list_operation_extracts_parts() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["document25.txt", "image100text.png", "test.doc"] {
            fs::write(temp_dir.path().join(name), "").unwrap();
        }

        let result = list_operation(temp_dir.path(), SortMode::ByNumber).unwrap();
        let names: Vec<&str> = result.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["test.doc", "document25.txt", "image100text.png"]);

        let image = &result.files[2];
        assert_eq!(image.number, 100);
        assert_eq!(image.text, "imagetext");
        assert_eq!(image.digits, "100");
        assert_eq!(image.text_only, "imagetext");
        assert_eq!(image.trailing, 0);

        let test = &result.files[0];
        assert_eq!(test.number, 0);
        assert_eq!(test.text, "test");
    }

    #[test]
    fn test_list_operation_reports_overflow() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("clip99999999999999999999.mp4"), "").unwrap();

        let err = list_operation(temp_dir.path(), SortMode::ByName).unwrap_err();
        assert!(format!("{err:#}").contains("clip99999999999999999999.mp4"));
        assert!(matches!(
            err.downcast_ref::<RenumerateError>(),
            Some(RenumerateError::NumberOverflow { .. })
        ));
    }
}
