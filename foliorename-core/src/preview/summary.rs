use crate::scanner::RenamePlan;
use std::fmt::Write;

/// Render the plan as plain `old -> new` lines, the format the original
/// console output used.
pub fn render_summary(plan: &RenamePlan) -> String {
    let mut output = String::new();
    for rename in &plan.renames {
        writeln!(
            output,
            "{} -> {}",
            rename.from.display(),
            rename.to.display()
        )
        .unwrap();
    }
    output
}
