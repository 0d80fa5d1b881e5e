use clap::Parser;
use foliorename_core::{OutputFormatter, VersionResult};
use std::io::{self, IsTerminal};
use std::process;

mod apply;
mod cli;
mod plan;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let use_color = !cli.no_color && io::stdout().is_terminal();

    let result = match cli.command {
        Commands::Plan {
            config,
            preview,
            output,
        } => plan::handle_plan(&config, preview, output, use_color),
        Commands::Apply {
            config,
            dry_run,
            output,
        } => apply::handle_apply(&config, dry_run, output),
        Commands::Version { output } => {
            let version = VersionResult {
                name: "foliorename".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            };
            println!("{}", version.format(output.into()));
            Ok(())
        },
    };

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        },
    }
}
