pub mod updates_listing;

pub use updates_listing::{FlatpakUpdate, parse_updates_listing};

/// Tool probed for before any Flatpak phase runs.
pub const TOOL: &str = "flatpak";

// Canonical argument vectors for the Flatpak channel.
pub const LIST_UPDATES: &[&str] = &["flatpak", "remote-ls", "--updates"];
pub const UPDATE: &[&str] = &["flatpak", "update", "-y"];
