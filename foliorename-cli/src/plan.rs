use anyhow::{Context, Result};
use foliorename_core::{compute_plan, render_plan, OutputFormatter, PlanOutcome};

use crate::cli::{ConfigArgs, OutputFormat, PreviewArg};

pub fn handle_plan(
    config: &ConfigArgs,
    preview: PreviewArg,
    output: OutputFormat,
    use_color: bool,
) -> Result<()> {
    let rename_config = config.to_config();
    let plan = compute_plan(&config.folder, &rename_config)
        .with_context(|| format!("failed to plan renames in {}", config.folder.display()))?;

    if output == OutputFormat::Summary {
        let rendered = render_plan(&plan, preview.into(), use_color);
        if !rendered.is_empty() {
            print!("{rendered}");
        }
    }

    let outcome = PlanOutcome::new(plan);
    println!("{}", outcome.format(output.into()));
    Ok(())
}
