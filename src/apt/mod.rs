pub mod autoremove_report;
pub mod upgrade_listing;

pub use autoremove_report::{RemovalCandidate, RemovalReport, parse_removal_report};
pub use upgrade_listing::{UpgradeCandidate, UpgradeListing, parse_upgrade_listing};

// Canonical argument vectors for the APT commands debsweep drives.
pub const REFRESH: &[&str] = &["sudo", "apt", "update"];
pub const LIST_UPGRADABLE: &[&str] = &["apt", "list", "--upgradable"];
pub const UPGRADE: &[&str] = &["sudo", "apt", "upgrade", "-y"];
pub const AUTOREMOVE_DRY_RUN: &[&str] = &["apt", "autoremove", "--dry-run"];
pub const AUTOREMOVE: &[&str] = &["sudo", "apt", "autoremove", "-y"];
pub const AUTOCLEAN: &[&str] = &["sudo", "apt", "autoclean"];
