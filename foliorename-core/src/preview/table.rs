use crate::config::Side;
use crate::scanner::RenamePlan;
use comfy_table::{Cell, Color, ContentArrangement, Table};

/// Render the plan as a table, one row per entry in plan order.
pub fn render_table(plan: &RenamePlan, use_color: bool) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    // Force styling even in non-TTY environments when colors are explicitly requested
    if use_color {
        table.enforce_styling();
        table.set_header(vec![
            Cell::new("Old name").fg(Color::Cyan),
            Cell::new("New name").fg(Color::Cyan),
            Cell::new("Side").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["Old name", "New name", "Side"]);
    }

    for (index, rename) in plan.renames.iter().enumerate() {
        let side = Side::at_index(index, plan.config.first_side);
        let old = rename
            .from
            .file_name()
            .map_or_else(|| rename.from.display().to_string(), |n| {
                n.to_string_lossy().into_owned()
            });
        let new = rename
            .to
            .file_name()
            .map_or_else(|| rename.to.display().to_string(), |n| {
                n.to_string_lossy().into_owned()
            });
        table.add_row(vec![old, new, side.to_string()]);
    }

    format!("{table}\n")
}
