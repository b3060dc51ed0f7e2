use crate::agents::{CommandExecutionAgent, CommandOutput, CommandRunner};
use crate::apt::{self, RemovalCandidate, UpgradeCandidate, UpgradeListing};
use crate::error::{DebsweepError, Result};
use crate::flatpak::{self, FlatpakUpdate};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use jiff::Zoned;
use std::time::Duration;

/// Flags controlling one orchestrator run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub dry_run: bool,
    pub verbose: bool,
}

/// Candidates discovered by the check phases of the current run.
///
/// Apply phases act only on what is recorded here; nothing re-queries the
/// package manager mid-apply.
#[derive(Debug, Clone, Default)]
struct RunState {
    upgradable: Vec<UpgradeCandidate>,
    flatpak_present: bool,
    flatpak_updates: Vec<FlatpakUpdate>,
    removable: Vec<RemovalCandidate>,
}

/// Terminal state of a full run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    CompletedWithErrors,
}

/// Execute the full update-and-clean run against the live system.
pub fn execute_run(options: &RunOptions) -> Result<RunStatus> {
    let agent = CommandExecutionAgent::new(options.verbose);
    run_phases(&agent, options)
}

/// Execute the check phases only; no apply phase ever runs and a failed
/// check does not stop the remaining checks.
pub fn execute_check(options: &RunOptions) -> Result<()> {
    let agent = CommandExecutionAgent::new(options.verbose);
    check_phases(&agent, options);
    Ok(())
}

fn run_phases(runner: &dyn CommandRunner, options: &RunOptions) -> Result<RunStatus> {
    println!("{}", "Starting full system update and clean...".cyan().bold());

    let mut state = RunState::default();
    check_apt_upgrades(runner, options, &mut state)?;
    check_flatpak_updates(runner, options, &mut state)?;
    check_removable(runner, &mut state)?;

    println!("\n{}", "─".repeat(50).dimmed());

    let mut failed_phases: Vec<&str> = Vec::new();

    if !apply_apt_upgrades(runner, options, &state) {
        failed_phases.push("apt upgrade");
    }

    // A failed Flatpak update is reported but never downgrades the run status.
    let _ = apply_flatpak_updates(runner, options, &state);

    if !apply_removal(runner, options, &state) {
        failed_phases.push("apt autoremove");
    }
    if !clean_cache(runner, options) {
        failed_phases.push("apt autoclean");
    }

    print_run_summary(&failed_phases);

    if failed_phases.is_empty() {
        Ok(RunStatus::Success)
    } else {
        Ok(RunStatus::CompletedWithErrors)
    }
}

fn check_phases(runner: &dyn CommandRunner, options: &RunOptions) -> RunState {
    println!("{}", "Checking for pending maintenance...".cyan().bold());

    let mut state = RunState::default();
    if let Err(e) = check_apt_upgrades(runner, options, &mut state) {
        println!("{} {}", "✗".red(), e);
    }
    if let Err(e) = check_flatpak_updates(runner, options, &mut state) {
        println!("{} {}", "✗".red(), e);
    }
    if let Err(e) = check_removable(runner, &mut state) {
        println!("{} {}", "✗".red(), e);
    }

    println!("\n{}", "Summary:".cyan().bold());
    println!(
        "  {} packages upgradable",
        state.upgradable.len().to_string().yellow()
    );
    if state.flatpak_present {
        println!(
            "  {} Flatpak updates available",
            state.flatpak_updates.len().to_string().yellow()
        );
    }
    println!(
        "  {} packages removable",
        state.removable.len().to_string().yellow()
    );

    state
}

fn check_apt_upgrades(
    runner: &dyn CommandRunner,
    options: &RunOptions,
    state: &mut RunState,
) -> Result<()> {
    println!("\n{}", "1. Checking for APT package updates...".yellow());

    let refresh = run_with_spinner(runner, options, apt::REFRESH, "Refreshing package lists");
    if !refresh.success {
        return Err(DebsweepError::RefreshFailed(failure_detail(&refresh)));
    }

    let listing = runner.run(apt::LIST_UPGRADABLE);
    if !listing.success {
        return Err(DebsweepError::UpgradeCheck(failure_detail(&listing)));
    }

    let parsed = apt::parse_upgrade_listing(&listing.stdout)?;
    state.upgradable = parsed.candidates().to_vec();

    match parsed {
        UpgradeListing::Empty => {
            println!("{}", "✓ All APT packages are up to date".green());
        }
        UpgradeListing::Parsed(_) => {
            println!(
                "{}",
                format!(
                    "Found {} packages that can be upgraded:",
                    state.upgradable.len()
                )
                .yellow()
            );
            for pkg in &state.upgradable {
                println!(
                    "  • {} {} → {}",
                    pkg.name.white().bold(),
                    pkg.current.red(),
                    pkg.available.green()
                );
            }
        }
    }

    Ok(())
}

fn check_flatpak_updates(
    runner: &dyn CommandRunner,
    options: &RunOptions,
    state: &mut RunState,
) -> Result<()> {
    println!("\n{}", "2. Checking for Flatpak updates...".yellow());

    if !runner.tool_available(flatpak::TOOL) {
        println!("{}", "Flatpak not installed, skipping".dimmed());
        state.flatpak_present = false;
        return Ok(());
    }
    state.flatpak_present = true;

    let listing = run_with_spinner(
        runner,
        options,
        flatpak::LIST_UPDATES,
        "Querying Flatpak remotes",
    );
    if !listing.success {
        return Err(DebsweepError::FlatpakCheck(failure_detail(&listing)));
    }

    state.flatpak_updates = flatpak::parse_updates_listing(&listing.stdout);

    if state.flatpak_updates.is_empty() {
        println!("{}", "✓ All Flatpak packages are up to date".green());
    } else {
        println!(
            "{}",
            format!(
                "Found {} Flatpak packages that can be updated:",
                state.flatpak_updates.len()
            )
            .yellow()
        );
        for update in &state.flatpak_updates {
            println!(
                "  • {} ({})",
                update.name.white().bold(),
                update.arch.dimmed()
            );
        }
    }

    Ok(())
}

fn check_removable(runner: &dyn CommandRunner, state: &mut RunState) -> Result<()> {
    println!("\n{}", "3. Checking for orphaned packages...".yellow());

    let simulation = runner.run(apt::AUTOREMOVE_DRY_RUN);
    if !simulation.success {
        return Err(DebsweepError::RemovalCheck(failure_detail(&simulation)));
    }

    let report = apt::parse_removal_report(&simulation.stdout);
    state.removable = report.candidates().to_vec();

    if state.removable.is_empty() {
        println!("{}", "✓ No orphaned packages found".green());
    } else {
        println!(
            "{}",
            format!(
                "Found {} packages that can be removed:",
                state.removable.len()
            )
            .yellow()
        );
        for pkg in &state.removable {
            println!("  • {}", pkg.name.white().bold());
        }
    }

    Ok(())
}

fn apply_apt_upgrades(runner: &dyn CommandRunner, options: &RunOptions, state: &RunState) -> bool {
    println!("\n{}", "4. Applying APT package upgrades...".yellow());

    if state.upgradable.is_empty() {
        println!("{}", "Nothing to upgrade".dimmed());
        return true;
    }
    if options.dry_run {
        print_dry_run(apt::UPGRADE);
        return true;
    }

    let result = run_with_spinner(runner, options, apt::UPGRADE, "Upgrading packages");
    if result.success {
        println!(
            "{}",
            format!("✓ {} packages upgraded", state.upgradable.len()).green()
        );
        true
    } else {
        println!("{}", "✗ Failed to upgrade packages".red());
        false
    }
}

fn apply_flatpak_updates(
    runner: &dyn CommandRunner,
    options: &RunOptions,
    state: &RunState,
) -> bool {
    println!("\n{}", "5. Updating Flatpak packages...".yellow());

    if !state.flatpak_present {
        println!("{}", "Flatpak not installed, skipping".dimmed());
        return true;
    }
    if options.dry_run {
        print_dry_run(flatpak::UPDATE);
        return true;
    }

    // `flatpak update` also refreshes runtimes, so it runs even when the
    // check listed no application updates.
    let result = run_with_spinner(
        runner,
        options,
        flatpak::UPDATE,
        "Updating Flatpak packages",
    );
    if result.success {
        println!("{}", "✓ Flatpak packages updated".green());
        true
    } else {
        println!("{}", "⚠ Flatpak update failed, continuing".yellow());
        false
    }
}

fn apply_removal(runner: &dyn CommandRunner, options: &RunOptions, state: &RunState) -> bool {
    println!("\n{}", "6. Removing orphaned packages...".yellow());

    if state.removable.is_empty() {
        println!("{}", "Nothing to remove".dimmed());
        return true;
    }
    if options.dry_run {
        print_dry_run(apt::AUTOREMOVE);
        return true;
    }

    let result = run_with_spinner(
        runner,
        options,
        apt::AUTOREMOVE,
        "Removing orphaned packages",
    );
    if result.success {
        println!(
            "{}",
            format!("✓ {} orphaned packages removed", state.removable.len()).green()
        );
        true
    } else {
        println!("{}", "✗ Failed to remove orphaned packages".red());
        false
    }
}

fn clean_cache(runner: &dyn CommandRunner, options: &RunOptions) -> bool {
    println!("\n{}", "7. Cleaning package cache...".yellow());

    if options.dry_run {
        print_dry_run(apt::AUTOCLEAN);
        return true;
    }

    let result = run_with_spinner(runner, options, apt::AUTOCLEAN, "Cleaning package cache");
    if result.success {
        println!("{}", "✓ Package cache cleaned".green());
        true
    } else {
        println!("{}", "✗ Failed to clean package cache".red());
        false
    }
}

/// Run a slow package-manager command behind a spinner. The spinner stays
/// hidden in verbose mode so the echoed command lines remain readable.
fn run_with_spinner(
    runner: &dyn CommandRunner,
    options: &RunOptions,
    argv: &[&str],
    message: &str,
) -> CommandOutput {
    let pb = ProgressBar::new_spinner();
    if options.verbose {
        pb.set_draw_target(ProgressDrawTarget::hidden());
    }
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = runner.run(argv);
    pb.finish_and_clear();
    result
}

fn print_dry_run(argv: &[&str]) {
    println!(
        "{} {}",
        "Dry run - would run:".yellow(),
        argv.join(" ").cyan()
    );
}

fn print_run_summary(failed_phases: &[&str]) {
    if failed_phases.is_empty() {
        println!(
            "\n{}",
            "✨ Update and clean completed successfully!".green().bold()
        );
    } else {
        println!("\n{}", "Update completed with some errors:".yellow().bold());
        for phase in failed_phases {
            println!("  {} {}", "✗".red(), phase);
        }
    }

    let stamp = Zoned::now().strftime("%Y-%m-%d %H:%M:%S").to_string();
    println!("{}", format!("Finished at {}", stamp).dimmed());
}

fn failure_detail(output: &CommandOutput) -> String {
    output
        .stdout
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .map(|line| line.trim().to_string())
        .unwrap_or_else(|| "command exited with an error".to_string())
}
