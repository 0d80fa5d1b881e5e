use anyhow::{Context, Result};
use foliorename_core::{
    apply_plan, compute_plan, ApplyMode, ApplyOutcome, OutputFormatter,
};

use crate::cli::{ConfigArgs, OutputFormat};

pub fn handle_apply(config: &ConfigArgs, dry_run: bool, output: OutputFormat) -> Result<()> {
    let rename_config = config.to_config();
    let plan = compute_plan(&config.folder, &rename_config)
        .with_context(|| format!("failed to plan renames in {}", config.folder.display()))?;

    let mode = if dry_run {
        ApplyMode::DryRun
    } else {
        ApplyMode::Live
    };
    let report = apply_plan(&plan, mode)?;
    let had_failures = report.failed > 0;

    let outcome = ApplyOutcome { report };
    println!("{}", outcome.format(output.into()));

    if had_failures {
        anyhow::bail!("{} rename(s) failed", outcome.report.failed);
    }
    Ok(())
}
