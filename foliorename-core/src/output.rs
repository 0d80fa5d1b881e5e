use crate::apply::ApplyReport;
use crate::scanner::RenamePlan;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Result of a plan operation
#[derive(Debug, Serialize, Deserialize)]
pub struct PlanOutcome {
    pub plan_id: String,
    pub folder: String,
    pub entries: usize,
    pub duplicate_targets: Vec<String>,
    pub plan: RenamePlan,
}

impl PlanOutcome {
    pub fn new(plan: RenamePlan) -> Self {
        Self {
            plan_id: plan.id.clone(),
            folder: plan.folder.display().to_string(),
            entries: plan.len(),
            duplicate_targets: plan
                .duplicate_targets()
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            plan,
        }
    }
}

/// Result of an apply operation
#[derive(Debug, Serialize, Deserialize)]
pub struct ApplyOutcome {
    pub report: ApplyReport,
}

/// Result of a version command
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String;
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for PlanOutcome {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "plan",
            "plan_id": self.plan_id,
            "folder": self.folder,
            "summary": {
                "entries": self.entries,
                "duplicate_targets": self.duplicate_targets,
            },
            "plan": self.plan,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        writeln!(output, "Foliorename plan for {}", self.folder).unwrap();
        writeln!(output, "Renames: {} items", self.entries).unwrap();
        writeln!(output, "Plan ID: {}", self.plan_id).unwrap();

        if !self.duplicate_targets.is_empty() {
            writeln!(
                output,
                "WARNING: {} target name(s) collide; this plan cannot be applied",
                self.duplicate_targets.len()
            )
            .unwrap();
        }

        output
    }
}

impl OutputFormatter for ApplyOutcome {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": self.report.failed == 0,
            "operation": "apply",
            "plan_id": self.report.plan_id,
            "dry_run": self.report.dry_run,
            "summary": {
                "renamed": self.report.renamed,
                "failed": self.report.failed,
            },
            "lines": self.report.lines,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = self.report.render();

        if self.report.dry_run {
            writeln!(
                output,
                "Test mode: {} rename(s) reported, nothing touched",
                self.report.lines.len()
            )
            .unwrap();
        } else if self.report.failed == 0 {
            writeln!(output, "Renamed {} item(s) successfully", self.report.renamed).unwrap();
        } else {
            writeln!(
                output,
                "Renamed {} item(s) with {} failure(s)",
                self.report.renamed, self.report.failed
            )
            .unwrap();
        }

        output
    }
}

impl OutputFormatter for VersionResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "name": self.name,
            "version": self.version,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}
