use crate::error::RenumerateError;
use crate::extract::{extract_numbers_only, extract_text_only};
use crate::listing::FileEntry;
use crate::policy::{NamingPolicy, NamingScheme};
use serde::Serialize;
use std::collections::HashSet;
use std::path::PathBuf;

/// One source file and the name it will receive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedRename {
    pub source: FileEntry,
    pub destination_stem: String,
    /// `destination_stem` plus the source's original extension
    pub destination_name: String,
}

impl PlannedRename {
    /// True when the file already carries its planned name.
    pub fn is_noop(&self) -> bool {
        self.source.name == self.destination_name
    }

    pub fn destination_path(&self) -> PathBuf {
        self.source.sibling(&self.destination_name)
    }
}

/// Complete source to destination mapping for one directory.
///
/// Destination stems are unique and every input file appears exactly once, in
/// the order it was given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenamePlan {
    pub entries: Vec<PlannedRename>,
}

impl RenamePlan {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlannedRename> {
        self.entries.iter()
    }

    /// Check the plan against the files it was built from.
    pub fn verify(&self, sources: &[FileEntry]) -> Result<(), RenumerateError> {
        if self.entries.len() != sources.len() {
            return Err(RenumerateError::PlanInvariant(format!(
                "plan has {} entries for {} files",
                self.entries.len(),
                sources.len()
            )));
        }

        let mut stems = HashSet::with_capacity(self.entries.len());
        let mut names = HashSet::with_capacity(self.entries.len());
        for (planned, source) in self.entries.iter().zip(sources) {
            if planned.source != *source {
                return Err(RenumerateError::PlanInvariant(format!(
                    "entry for {} is out of order or missing",
                    source.name
                )));
            }
            if !stems.insert(planned.destination_stem.as_str())
                || !names.insert(planned.destination_name.as_str())
            {
                return Err(RenumerateError::PlanInvariant(format!(
                    "destination {} assigned twice",
                    planned.destination_name
                )));
            }
            if is_reserved(&planned.destination_stem, &planned.source.extension) {
                return Err(RenumerateError::PlanInvariant(format!(
                    "{} would be renamed to an unusable name",
                    source.name
                )));
            }
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a RenamePlan {
    type Item = &'a PlannedRename;
    type IntoIter = std::slice::Iter<'a, PlannedRename>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Names no file can be renamed to.
fn is_reserved(stem: &str, extension: &str) -> bool {
    extension.is_empty() && matches!(stem, "" | "." | "..")
}

fn proposed_stem(entry: &FileEntry, position: usize, policy: &NamingPolicy) -> String {
    let core = match policy.scheme {
        NamingScheme::Sequential => position.to_string(),
        NamingScheme::NumbersOnly => extract_numbers_only(&entry.stem),
        NamingScheme::TextOnly => extract_text_only(&entry.stem),
    };
    format!("{}{}{}", policy.prefix, core, policy.suffix)
}

/// Stems and full names handed out so far.
#[derive(Default)]
struct Assigned {
    stems: HashSet<String>,
    names: HashSet<String>,
}

impl Assigned {
    fn is_taken(&self, stem: &str, extension: &str) -> bool {
        self.stems.contains(stem)
            || self.names.contains(&format!("{stem}{extension}"))
            || is_reserved(stem, extension)
    }

    fn insert(&mut self, stem: &str, extension: &str) {
        self.stems.insert(stem.to_string());
        self.names.insert(format!("{stem}{extension}"));
    }
}

/// Return `base`, or the first free `base_2`, `base_3`, ... if it is taken.
///
/// A candidate is taken when its stem was already assigned, or when its full
/// name was (`.txt5` and `5.txt` both reduce to `.txt` under text-only).
fn disambiguate(base: String, extension: &str, assigned: &Assigned) -> String {
    if !assigned.is_taken(&base, extension) {
        return base;
    }

    let mut n = 2usize;
    loop {
        let candidate = format!("{base}_{n}");
        if !assigned.is_taken(&candidate, extension) {
            return candidate;
        }
        n += 1;
    }
}

/// Compute the destination of every file in `ordered`.
///
/// Earlier entries win: when two files want the same stem, the first keeps it
/// and later ones get a `_<n>` suffix. A destination that matches another
/// file's *current* name is fine here; the executor deals with that.
pub fn build_plan(ordered: &[FileEntry], policy: &NamingPolicy) -> RenamePlan {
    let mut assigned = Assigned::default();
    let mut entries = Vec::with_capacity(ordered.len());

    for (index, entry) in ordered.iter().enumerate() {
        let base = proposed_stem(entry, index + 1, policy);
        let stem = disambiguate(base, &entry.extension, &assigned);
        assigned.insert(&stem, &entry.extension);

        entries.push(PlannedRename {
            destination_name: format!("{}{}", stem, entry.extension),
            destination_stem: stem,
            source: entry.clone(),
        });
    }

    RenamePlan { entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(names: &[&str]) -> Vec<FileEntry> {
        names
            .iter()
            .map(|n| FileEntry::from_path(PathBuf::from("dir").join(n)).unwrap())
            .collect()
    }

    fn destinations(plan: &RenamePlan) -> Vec<&str> {
        plan.iter().map(|p| p.destination_name.as_str()).collect()
    }

    #[test]
    fn test_sequential_ignores_existing_numbers() {
        let files = entries(&["photo_001.jpg", "photo_002.jpg", "photo_003.jpg"]);
        let policy = NamingPolicy::new(NamingScheme::Sequential).with_prefix("image_");
        let plan = build_plan(&files, &policy);

        assert_eq!(
            destinations(&plan),
            vec!["image_1.jpg", "image_2.jpg", "image_3.jpg"]
        );
        plan.verify(&files).unwrap();
    }

    #[test]
    fn test_sequential_with_prefix_and_suffix_keeps_extensions() {
        let files = entries(&["b.png", "a.txt", "README"]);
        let policy = NamingPolicy::new(NamingScheme::Sequential)
            .with_prefix("img_")
            .with_suffix("_final");
        let plan = build_plan(&files, &policy);

        assert_eq!(
            destinations(&plan),
            vec!["img_1_final.png", "img_2_final.txt", "img_3_final"]
        );
    }

    #[test]
    fn test_numbers_only() {
        let files = entries(&["abc123def456.txt", "photo_001.jpg", "123.png"]);
        let plan = build_plan(&files, &NamingPolicy::new(NamingScheme::NumbersOnly));
        assert_eq!(destinations(&plan), vec!["123456.txt", "001.jpg", "123.png"]);
    }

    #[test]
    fn test_numbers_only_without_digits_uses_affixes() {
        let files = entries(&["alpha.jpg", "beta.jpg"]);
        let policy = NamingPolicy::new(NamingScheme::NumbersOnly)
            .with_prefix("n")
            .with_suffix("x");
        let plan = build_plan(&files, &policy);
        assert_eq!(destinations(&plan), vec!["nx.jpg", "nx_2.jpg"]);
    }

    #[test]
    fn test_text_only_collisions_get_numbered() {
        let files = entries(&["photo_001.jpg", "photo_002.jpg", "photo_003.jpg"]);
        let plan = build_plan(&files, &NamingPolicy::new(NamingScheme::TextOnly));
        assert_eq!(
            destinations(&plan),
            vec!["photo_.jpg", "photo__2.jpg", "photo__3.jpg"]
        );
        plan.verify(&files).unwrap();
    }

    #[test]
    fn test_disambiguation_skips_taken_suffixes() {
        let mut assigned = Assigned::default();
        for stem in ["x", "x_2", "x_3"] {
            assigned.insert(stem, ".a");
        }
        assert_eq!(disambiguate("x".to_string(), ".a", &assigned), "x_4");
        assert_eq!(disambiguate("y".to_string(), ".a", &assigned), "y");
    }

    #[test]
    fn test_full_names_never_repeat_across_stems() {
        // ".txt5" has no extension and "5.txt" has an empty stem; both want ".txt"
        let files = entries(&[".txt5", "5.txt"]);
        let plan = build_plan(&files, &NamingPolicy::new(NamingScheme::TextOnly));
        assert_eq!(destinations(&plan), vec![".txt", "_2.txt"]);
        plan.verify(&files).unwrap();

        let files = entries(&["5.txt", ".txt5"]);
        let plan = build_plan(&files, &NamingPolicy::new(NamingScheme::TextOnly));
        assert_eq!(destinations(&plan), vec![".txt", ".txt_2"]);
        plan.verify(&files).unwrap();
    }

    #[test]
    fn test_repeated_collisions_count_upwards() {
        let files = entries(&["x1.a", "x_2.b", "x3.c", "x4.d"]);
        let plan = build_plan(&files, &NamingPolicy::new(NamingScheme::TextOnly));
        let stems: Vec<&str> = plan.iter().map(|p| p.destination_stem.as_str()).collect();
        assert_eq!(stems, vec!["x", "x_", "x_2", "x_3"]);
    }

    #[test]
    fn test_stems_collide_even_across_extensions() {
        let files = entries(&["clip1.mp4", "clip2.jpg"]);
        let plan = build_plan(&files, &NamingPolicy::new(NamingScheme::TextOnly));
        assert_eq!(destinations(&plan), vec!["clip.mp4", "clip_2.jpg"]);
    }

    #[test]
    fn test_empty_name_is_never_assigned() {
        let files = entries(&["123", "456"]);
        let plan = build_plan(&files, &NamingPolicy::new(NamingScheme::TextOnly));
        assert_eq!(destinations(&plan), vec!["_2", "_3"]);
        plan.verify(&files).unwrap();

        // With an extension an empty stem is a valid dotfile name
        let files = entries(&["123.txt"]);
        let plan = build_plan(&files, &NamingPolicy::new(NamingScheme::TextOnly));
        assert_eq!(destinations(&plan), vec![".txt"]);
    }

    #[test]
    fn test_current_names_are_not_planning_collisions() {
        // "2.txt" wants "1.txt", which "1.txt" currently holds; planning allows it
        let files = entries(&["2.txt", "1.txt"]);
        let plan = build_plan(&files, &NamingPolicy::new(NamingScheme::Sequential));
        assert_eq!(destinations(&plan), vec!["1.txt", "2.txt"]);
        assert!(!plan.entries[0].is_noop());
    }

    #[test]
    fn test_verify_catches_duplicates_and_mismatches() {
        let files = entries(&["a.txt", "b.txt"]);
        let mut plan = build_plan(&files, &NamingPolicy::new(NamingScheme::Sequential));
        plan.entries[1].destination_stem = "1".to_string();
        plan.entries[1].destination_name = "1.txt".to_string();
        assert!(matches!(
            plan.verify(&files),
            Err(RenumerateError::PlanInvariant(_))
        ));

        let plan = build_plan(&files, &NamingPolicy::new(NamingScheme::Sequential));
        assert!(plan.verify(&files[..1]).is_err());
    }

    #[test]
    fn test_empty_input_gives_empty_plan() {
        let plan = build_plan(&[], &NamingPolicy::default());
        assert!(plan.is_empty());
        plan.verify(&[]).unwrap();
    }
}
