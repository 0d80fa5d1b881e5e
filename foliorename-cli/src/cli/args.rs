use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::types::{OutputFormat, PreviewArg, SideArg};

/// Batch rename manuscript images into folio recto/verso sequence
#[derive(Parser, Debug)]
#[command(name = "foliorename")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,
}

/// Renaming rules shared by `plan` and `apply`
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Folder whose immediate entries are renamed (no recursion)
    pub folder: PathBuf,

    /// Text placed before the folio number, typically a shelfmark
    /// (e.g. "Paris, BnF, lat. 16480, fol. ")
    #[arg(long, default_value = "")]
    pub prefix: String,

    /// Folio number of the first entry
    #[arg(long, value_name = "N")]
    pub start_folio: u32,

    /// Zero-padding width for folio numbers; wider numbers are never
    /// truncated
    #[arg(long, default_value_t = 3, value_name = "N")]
    pub digits: usize,

    /// Suffix marking recto sides
    #[arg(long, default_value = "r")]
    pub recto_suffix: String,

    /// Suffix marking verso sides
    #[arg(long, default_value = "v")]
    pub verso_suffix: String,

    /// Side shown by the first entry of the sorted listing
    #[arg(long, value_enum, default_value_t = SideArg::Recto)]
    pub first_side: SideArg,

    /// Fixed text appended after the side suffix
    #[arg(long, default_value = "")]
    pub general_suffix: String,

    /// Rename folders instead of files
    #[arg(long)]
    pub folders: bool,

    /// Drop file extensions instead of carrying them over
    #[arg(long)]
    pub ignore_extension: bool,
}

impl ConfigArgs {
    /// Build the fully-typed configuration the core expects. Clap has
    /// already rejected malformed numeric input by this point.
    pub fn to_config(&self) -> foliorename_core::RenameConfig {
        foliorename_core::RenameConfig {
            prefix: self.prefix.clone(),
            start_folio: self.start_folio,
            folio_digits: self.digits,
            recto_suffix: self.recto_suffix.clone(),
            verso_suffix: self.verso_suffix.clone(),
            first_side: self.first_side.into(),
            general_suffix: self.general_suffix.clone(),
            kind: if self.folders {
                foliorename_core::EntryKind::Folders
            } else {
                foliorename_core::EntryKind::Files
            },
            ignore_extension: self.ignore_extension,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute and display the renaming plan without touching anything
    Plan {
        #[command(flatten)]
        config: ConfigArgs,

        /// Preview format for the plan
        #[arg(long, value_enum, default_value_t = PreviewArg::Table)]
        preview: PreviewArg,

        /// Output format for the result
        #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
        output: OutputFormat,
    },

    /// Compute the plan and rename every entry in plan order
    Apply {
        #[command(flatten)]
        config: ConfigArgs,

        /// Report the renames without performing them (test mode)
        #[arg(long)]
        dry_run: bool,

        /// Output format for the result
        #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
        output: OutputFormat,
    },

    /// Print version information
    Version {
        /// Output format for the result
        #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
        output: OutputFormat,
    },
}
