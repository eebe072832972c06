//! Applying a [`RenamePlan`] to the filesystem.
//!
//! A single pass in plan order is not safe: the destination of one entry can be
//! the current name of another entry that has not moved yet (`1.txt <-> 2.txt`).
//! Entries whose destination is occupied are first parked under a temporary
//! name and only moved to their destination in a second pass, after every
//! occupant has had its turn to move away. No existing file is ever
//! overwritten.

use crate::plan::{PlannedRename, RenamePlan};
use crate::policy::RunMode;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, info, warn};

/// What happened to one plan entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum RenameOutcome {
    Renamed,
    /// The file already had its planned name
    Unchanged,
    Failed(String),
    /// Nothing was touched because the run was a preview or dry run
    Skipped(RunMode),
}

impl RenameOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryOutcome {
    pub source: String,
    pub destination: String,
    pub outcome: RenameOutcome,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RenameSummary {
    pub successful: usize,
    pub failed: usize,
}

/// Result of running a plan, in plan order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameReport {
    pub mode: RunMode,
    pub outcomes: Vec<EntryOutcome>,
    pub summary: RenameSummary,
}

impl RenameReport {
    fn new(mode: RunMode, outcomes: Vec<EntryOutcome>) -> Self {
        let failed = outcomes.iter().filter(|o| !o.outcome.is_success()).count();
        let summary = RenameSummary {
            successful: outcomes.len() - failed,
            failed,
        };
        Self {
            mode,
            outcomes,
            summary,
        }
    }

    pub fn has_failures(&self) -> bool {
        self.summary.failed > 0
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

fn entry_outcome(entry: &PlannedRename, outcome: RenameOutcome) -> EntryOutcome {
    EntryOutcome {
        source: entry.source.name.clone(),
        destination: entry.destination_name.clone(),
        outcome,
    }
}

/// Run `plan` in the given mode.
///
/// `DryRun` and `Preview` never touch the filesystem and report every entry as
/// skipped (counted as successful). `Execute` renames for real; per-entry
/// failures are recorded and never stop the remaining entries.
pub fn execute(plan: &RenamePlan, mode: RunMode) -> RenameReport {
    match mode {
        RunMode::DryRun | RunMode::Preview => {
            let outcomes = plan
                .iter()
                .map(|entry| entry_outcome(entry, RenameOutcome::Skipped(mode)))
                .collect();
            RenameReport::new(mode, outcomes)
        },
        RunMode::Execute => apply(plan),
    }
}

/// Outcome of the first pass for one entry.
enum Step {
    Done(RenameOutcome),
    Parked(PathBuf),
}

fn apply(plan: &RenamePlan) -> RenameReport {
    info!(entries = plan.len(), "Applying rename plan");

    // Temporary names must not shadow any planned destination
    let reserved: HashSet<&str> = plan.iter().map(|e| e.destination_name.as_str()).collect();

    let steps: Vec<Step> = plan.iter().map(|entry| first_pass(entry, &reserved)).collect();

    let outcomes: Vec<EntryOutcome> = plan
        .iter()
        .zip(steps)
        .map(|(entry, step)| {
            let outcome = match step {
                Step::Done(outcome) => outcome,
                Step::Parked(temp) => second_pass(entry, &temp),
            };
            entry_outcome(entry, outcome)
        })
        .collect();

    let report = RenameReport::new(RunMode::Execute, outcomes);
    info!(
        successful = report.summary.successful,
        failed = report.summary.failed,
        "Rename plan applied"
    );
    report
}

/// True if anything, including a dangling symlink, exists at `path`.
fn occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

fn first_pass(entry: &PlannedRename, reserved: &HashSet<&str>) -> Step {
    if entry.is_noop() {
        return Step::Done(RenameOutcome::Unchanged);
    }

    let source = &entry.source.path;
    let destination = entry.destination_path();

    // On case-insensitive filesystems a case-only rename also lands here,
    // since the destination resolves to the source itself.
    if occupied(&destination) {
        let temp = temp_path(entry, reserved);
        return match fs::rename(source, &temp) {
            Ok(()) => {
                debug!(
                    from = %entry.source.name,
                    temp = %temp.display(),
                    "Destination occupied, parked under temporary name"
                );
                Step::Parked(temp)
            },
            Err(e) => Step::Done(fail(entry, format!("could not move to a temporary name: {e}"))),
        };
    }

    match fs::rename(source, &destination) {
        Ok(()) => {
            debug!(from = %entry.source.name, to = %entry.destination_name, "Renamed");
            Step::Done(RenameOutcome::Renamed)
        },
        Err(e) => Step::Done(fail(entry, e.to_string())),
    }
}

fn second_pass(entry: &PlannedRename, temp: &Path) -> RenameOutcome {
    let destination = entry.destination_path();

    if occupied(&destination) {
        return restore(
            entry,
            temp,
            format!("destination {} is still occupied", entry.destination_name),
        );
    }

    match fs::rename(temp, &destination) {
        Ok(()) => {
            debug!(from = %entry.source.name, to = %entry.destination_name, "Renamed from temporary name");
            RenameOutcome::Renamed
        },
        Err(e) => restore(entry, temp, e.to_string()),
    }
}

/// Put a parked file back under its original name after a failed second pass.
fn restore(entry: &PlannedRename, temp: &Path, reason: String) -> RenameOutcome {
    let source = &entry.source.path;

    if occupied(source) {
        return fail(
            entry,
            format!("{reason}; file left at {}", temp.display()),
        );
    }

    match fs::rename(temp, source) {
        Ok(()) => fail(entry, reason),
        Err(e) => fail(
            entry,
            format!(
                "{reason}; could not restore original name ({e}); file left at {}",
                temp.display()
            ),
        ),
    }
}

fn fail(entry: &PlannedRename, reason: String) -> RenameOutcome {
    warn!(
        from = %entry.source.name,
        to = %entry.destination_name,
        %reason,
        "Rename failed"
    );
    RenameOutcome::Failed(reason)
}

/// A free name next to the source: `.<name>.<pid>.renumerate.tmp`, with a
/// counter added if that is taken.
fn temp_path(entry: &PlannedRename, reserved: &HashSet<&str>) -> PathBuf {
    let pid = process::id();
    let mut attempt = 0u32;
    loop {
        let name = if attempt == 0 {
            format!(".{}.{}.renumerate.tmp", entry.source.name, pid)
        } else {
            format!(".{}.{}.{}.renumerate.tmp", entry.source.name, pid, attempt)
        };
        let candidate = entry.source.sibling(&name);
        if !reserved.contains(name.as_str()) && !occupied(&candidate) {
            return candidate;
        }
        attempt += 1;
    }
}
