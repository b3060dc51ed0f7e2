mod agents;
mod apt;
mod cli;
mod error;
mod flatpak;
mod workflow;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use std::process;
use workflow::{RunOptions, RunStatus};

fn main() {
    let cli = Cli::parse();
    let options = RunOptions {
        dry_run: cli.dry_run,
        verbose: cli.verbose,
    };

    if cli.check_only {
        // Check-only never applies anything and always exits cleanly.
        if let Err(e) = workflow::execute_check(&options) {
            eprintln!("{} {}", "Error:".red().bold(), e);
        }
        return;
    }

    match workflow::execute_run(&options) {
        Ok(RunStatus::Success) => {}
        Ok(RunStatus::CompletedWithErrors) => process::exit(1),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            eprintln!("{}", "Run aborted, remaining phases skipped".red());
            process::exit(1);
        }
    }
}
