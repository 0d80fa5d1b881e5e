pub mod args;
pub mod types;

pub use args::{Cli, Commands, ConfigArgs};
pub use types::{OutputFormat, PreviewArg, SideArg};
