#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]

pub mod apply;
pub mod config;
pub mod output;
pub mod preview;
pub mod scanner;
pub mod sequence;

pub use apply::{apply_plan, ApplyMode, ApplyReport, ReportLine};
pub use config::{ConfigError, EntryKind, RenameConfig, Side};
pub use output::{ApplyOutcome, OutputFormat, OutputFormatter, PlanOutcome, VersionResult};
pub use preview::{render_plan, Preview};
pub use scanner::{compute_plan, PlannedRename, RenamePlan};
pub use sequence::{base_name, folio_at_index, folio_step, format_folio};
