use crate::executor::execute;
use crate::listing::{list_files, sort_files};
use crate::output::RenameResult;
use crate::plan::{build_plan, RenamePlan};
use crate::policy::NamingPolicy;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// List, sort and plan `directory` under `policy` without touching anything.
pub fn plan_operation(directory: &Path, policy: &NamingPolicy) -> Result<RenamePlan> {
    policy.validate()?;

    let files = list_files(directory)
        .with_context(|| format!("Failed to list files in {}", directory.display()))?;
    let files = sort_files(files, policy.sort);

    let plan = build_plan(&files, policy);
    plan.verify(&files)?;

    info!(
        directory = %directory.display(),
        files = plan.len(),
        scheme = %policy.scheme,
        sort = %policy.sort,
        "Built rename plan"
    );
    Ok(plan)
}

/// Rename operation - plans `directory` and runs the plan in `policy.mode`
pub fn rename_operation(directory: &Path, policy: &NamingPolicy) -> Result<RenameResult> {
    let plan = plan_operation(directory, policy)?;
    let report = execute(&plan, policy.mode);

    Ok(RenameResult {
        directory: directory.to_path_buf(),
        policy: policy.clone(),
        report,
    })
}
