/// A Flatpak ref with an update available on its remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatpakUpdate {
    pub name: String,
    pub arch: String,
    pub branch: String,
}

/// Parse `flatpak remote-ls --updates` output, one tab-separated ref per line.
///
/// Lines with fewer than three columns are skipped.
pub fn parse_updates_listing(output: &str) -> Vec<FlatpakUpdate> {
    output
        .lines()
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let columns: Vec<&str> = line.split('\t').collect();
            if columns.len() < 3 {
                return None;
            }
            Some(FlatpakUpdate {
                name: columns[0].to_string(),
                arch: columns[1].to_string(),
                branch: columns[2].to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tab_separated_columns() {
        let output = "org.gimp.GIMP\tx86_64\tstable\norg.inkscape.Inkscape\tx86_64\tstable\n";
        let updates = parse_updates_listing(output);

        assert_eq!(updates.len(), 2);
        assert_eq!(
            updates[0],
            FlatpakUpdate {
                name: "org.gimp.GIMP".to_string(),
                arch: "x86_64".to_string(),
                branch: "stable".to_string(),
            }
        );
    }

    #[test]
    fn skips_short_and_empty_lines() {
        let output = "\norg.gimp.GIMP\tx86_64\n";
        assert!(parse_updates_listing(output).is_empty());
    }

    #[test]
    fn extra_columns_are_tolerated() {
        let output = "org.gimp.GIMP\tx86_64\tstable\t2.10.36\n";
        let updates = parse_updates_listing(output);
        assert_eq!(updates[0].branch, "stable");
    }
}
