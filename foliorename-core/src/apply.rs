use crate::scanner::RenamePlan;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

/// Whether a plan is applied for real or only reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyMode {
    /// Report every pair without touching the filesystem.
    DryRun,
    /// Rename every pair in plan order.
    Live,
}

/// Outcome of one plan pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    pub from: PathBuf,
    pub to: PathBuf,
    pub succeeded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Full report of one apply pass, in plan order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyReport {
    pub plan_id: String,
    pub dry_run: bool,
    pub renamed: usize,
    pub failed: usize,
    pub lines: Vec<ReportLine>,
}

impl ApplyReport {
    /// Human-readable report, one `from -> to` line per pair, failures
    /// annotated with their message.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            write!(out, "{} -> {}", line.from.display(), line.to.display()).unwrap();
            if let Some(error) = &line.error {
                write!(out, "  [FAILED: {error}]").unwrap();
            }
            out.push('\n');
        }
        out
    }
}

/// Apply `plan` pair by pair, in plan order.
///
/// In dry-run mode nothing is mutated and every line reports success. In
/// live mode each pair is renamed with `fs::rename`; an individual
/// failure is recorded on its line and processing continues, since later
/// targets do not depend on earlier renames having completed and a
/// partial run is recovered by re-running on the remainder. A plan whose
/// targets collide is refused up front rather than half-applied.
pub fn apply_plan(plan: &RenamePlan, mode: ApplyMode) -> Result<ApplyReport> {
    if mode == ApplyMode::Live {
        let duplicates = plan.duplicate_targets();
        if !duplicates.is_empty() {
            bail!(
                "plan {} maps multiple entries to the same target ({}); \
                 check the prefix, suffixes and digit count",
                plan.id,
                duplicates
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
    }

    let mut lines = Vec::with_capacity(plan.renames.len());
    let mut renamed = 0;
    let mut failed = 0;

    for pair in &plan.renames {
        let error = match mode {
            ApplyMode::DryRun => None,
            ApplyMode::Live => fs::rename(&pair.from, &pair.to)
                .err()
                .map(|e| e.to_string()),
        };

        let succeeded = error.is_none();
        if succeeded {
            if mode == ApplyMode::Live {
                renamed += 1;
            }
        } else {
            failed += 1;
        }

        lines.push(ReportLine {
            from: pair.from.clone(),
            to: pair.to.clone(),
            succeeded,
            error,
        });
    }

    Ok(ApplyReport {
        plan_id: plan.id.clone(),
        dry_run: mode == ApplyMode::DryRun,
        renamed,
        failed,
        lines,
    })
}
