use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "debsweep",
    about = "Debsweep - keep a Debian host upgraded and tidy in one pass",
    version,
    author
)]
pub struct Cli {
    /// Show what each apply step would run without changing the system
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Echo each invoked command and surface stderr when a command fails
    #[arg(short, long)]
    pub verbose: bool,

    /// Run the check phases only and skip every apply phase
    #[arg(short, long)]
    pub check_only: bool,
}
