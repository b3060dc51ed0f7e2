use crate::error::{DebsweepError, Result};
use regex::Regex;

/// A package with a newer version available in the configured sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeCandidate {
    pub name: String,
    pub current: String,
    pub available: String,
}

/// Outcome of parsing an `apt list --upgradable` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpgradeListing {
    Parsed(Vec<UpgradeCandidate>),
    Empty,
}

impl UpgradeListing {
    pub fn candidates(&self) -> &[UpgradeCandidate] {
        match self {
            UpgradeListing::Parsed(candidates) => candidates,
            UpgradeListing::Empty => &[],
        }
    }
}

/// Parse the upgradable-packages listing into candidates, input order preserved.
///
/// A relevant line looks like `name/suite,... currentVersion availableVersion ...`.
/// Lines without a `/`, the introductory `Listing...` line, and anything else
/// that does not match the pattern are skipped.
pub fn parse_upgrade_listing(output: &str) -> Result<UpgradeListing> {
    let line_regex = Regex::new(r"^([^/]+)/\S+\s+(\S+)\s+(\S+)")
        .map_err(|e| DebsweepError::UpgradeCheck(format!("Regex error: {}", e)))?;

    let mut candidates = Vec::new();
    for line in output.lines() {
        if line.is_empty() || !line.contains('/') || line.starts_with("Listing...") {
            continue;
        }

        if let Some(caps) = line_regex.captures(line) {
            candidates.push(UpgradeCandidate {
                name: caps[1].to_string(),
                current: caps[2].to_string(),
                available: caps[3].to_string(),
            });
        }
    }

    if candidates.is_empty() {
        Ok(UpgradeListing::Empty)
    } else {
        Ok(UpgradeListing::Parsed(candidates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_name_and_versions() {
        let listing = parse_upgrade_listing(
            "Listing... Done\nbash/stable 5.1-2 5.1-3 amd64 [upgradable from: 5.1-2]\n",
        )
        .unwrap();

        assert_eq!(
            listing.candidates(),
            &[UpgradeCandidate {
                name: "bash".to_string(),
                current: "5.1-2".to_string(),
                available: "5.1-3".to_string(),
            }]
        );
    }

    #[test]
    fn skips_lines_without_slash_and_intro_line() {
        let listing = parse_upgrade_listing("Listing... Done\nWARNING: unstable CLI\n").unwrap();
        assert_eq!(listing, UpgradeListing::Empty);
    }

    #[test]
    fn skips_malformed_lines() {
        let output = "Listing...\n\
                      curl/stable 7.88.1-10 7.88.1-11 amd64\n\
                      broken/only-one-token\n\
                      git/stable 2.39.2-1 2.39.5-1 amd64\n";
        let listing = parse_upgrade_listing(output).unwrap();

        let names: Vec<&str> = listing.candidates().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["curl", "git"]);
    }

    #[test]
    fn preserves_input_order() {
        let output = "zsh/stable 5.9-4 5.9-5 amd64\napt/stable 2.6.1 2.6.2 amd64\n";
        let listing = parse_upgrade_listing(output).unwrap();

        let names: Vec<&str> = listing.candidates().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["zsh", "apt"]);
    }

    #[test]
    fn empty_output_is_empty_not_error() {
        assert_eq!(parse_upgrade_listing("").unwrap(), UpgradeListing::Empty);
    }
}
