mod summary;
mod table;

pub use summary::render_summary;
pub use table::render_table;

use crate::scanner::RenamePlan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview {
    Table,
    Summary,
    None,
}

impl std::str::FromStr for Preview {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "summary" => Ok(Self::Summary),
            "none" => Ok(Self::None),
            _ => Err(format!("Invalid preview format: {}", s)),
        }
    }
}

/// Render the plan in the specified format
pub fn render_plan(plan: &RenamePlan, format: Preview, use_color: bool) -> String {
    match format {
        Preview::Table => render_table(plan, use_color),
        Preview::Summary => render_summary(plan),
        Preview::None => String::new(),
    }
}
