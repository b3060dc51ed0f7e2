/// Header apt prints before the list of autoremovable packages.
pub const REMOVAL_HEADER: &str = "The following packages will be REMOVED:";

/// A package the autoremove simulation marked as no longer needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalCandidate {
    pub name: String,
}

/// Outcome of parsing an `apt autoremove --dry-run` report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalReport {
    Parsed(Vec<RemovalCandidate>),
    HeaderNotFound,
}

impl RemovalReport {
    pub fn candidates(&self) -> &[RemovalCandidate] {
        match self {
            RemovalReport::Parsed(candidates) => candidates,
            RemovalReport::HeaderNotFound => &[],
        }
    }
}

/// Collect the package names listed under the REMOVED header.
///
/// Names follow the header on lines indented by at least three spaces, several
/// per line once apt starts wrapping. Collection stops at the first non-empty
/// line without that indentation. Duplicates keep their first occurrence.
pub fn parse_removal_report(output: &str) -> RemovalReport {
    let mut in_package_list = false;
    let mut names: Vec<String> = Vec::new();

    for line in output.lines() {
        if line.contains(REMOVAL_HEADER) {
            in_package_list = true;
            continue;
        }
        if !in_package_list || line.trim().is_empty() {
            continue;
        }
        if !line.starts_with("   ") {
            break;
        }

        for name in line.split_whitespace() {
            if !names.iter().any(|known| known == name) {
                names.push(name.to_string());
            }
        }
    }

    if !in_package_list {
        return RemovalReport::HeaderNotFound;
    }

    RemovalReport::Parsed(
        names
            .into_iter()
            .map(|name| RemovalCandidate { name })
            .collect(),
    )
}
