//! Run-length cells for a row of per-release versions

use std::cmp::Ordering;

use serde::Serialize;

use crate::version::rpmvercmp::compare;

/// Consecutive equal versions collapsed into one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionCell {
    /// Number of columns this cell spans, at least 1
    pub repeat: usize,
    pub version: String,
    /// Version the cell is classified against
    pub base: String,
}

/// How a cell's version relates to its base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Class {
    Downgrade,
    Upgrade,
    Unchanged,
}

impl Class {
    /// Label used by renderers; unchanged cells carry no label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Class::Downgrade => "downgrade",
            Class::Upgrade => "upgrade",
            Class::Unchanged => "",
        }
    }
}

impl VersionCell {
    pub fn new(repeat: usize, version: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            repeat,
            version: version.into(),
            base: base.into(),
        }
    }

    pub fn class(&self) -> Class {
        match compare(&self.version, &self.base) {
            Ordering::Less => Class::Downgrade,
            Ordering::Greater => Class::Upgrade,
            Ordering::Equal => Class::Unchanged,
        }
    }
}

/// Collapse runs of equal versions in `columns` into cells.
///
/// A cell closed by a differing version is classified against that version.
/// The last cell is classified against `base`.
pub fn normalize<S: AsRef<str>>(columns: &[S], base: &str) -> Vec<VersionCell> {
    let mut cells = Vec::new();
    let mut current: Option<(usize, &str)> = None;

    for column in columns {
        let version = column.as_ref();
        current = match current {
            Some((repeat, run)) if compare(version, run) == Ordering::Equal => {
                Some((repeat + 1, run))
            }
            Some((repeat, run)) => {
                cells.push(VersionCell::new(repeat, run, version));
                Some((1, version))
            }
            None => Some((1, version)),
        };
    }

    if let Some((repeat, run)) = current {
        cells.push(VersionCell::new(repeat, run, base));
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn normalize_collapses_equal_neighbours() {
        let cells = normalize(&["1.2", "1.2", "1.3"], "1.3");

        assert_eq!(
            cells,
            vec![
                VersionCell::new(2, "1.2", "1.3"),
                VersionCell::new(1, "1.3", "1.3"),
            ]
        );
        assert_eq!(cells[0].class(), Class::Downgrade);
        assert_eq!(cells[1].class(), Class::Unchanged);
    }

    #[test]
    fn normalize_single_column_uses_reference_base() {
        let cells = normalize(&["2.0"], "1.0");

        assert_eq!(cells, vec![VersionCell::new(1, "2.0", "1.0")]);
        assert_eq!(cells[0].class(), Class::Upgrade);
    }

    #[test]
    fn normalize_empty_columns_yields_no_cells() {
        let columns: [&str; 0] = [];
        assert!(normalize(&columns, "1.0").is_empty());
    }

    #[test]
    fn normalize_groups_by_version_order_not_spelling() {
        let cells = normalize(&["1.0", "1.00", "1_0", "1.1"], "");

        assert_eq!(
            cells,
            vec![
                VersionCell::new(3, "1.0", "1.1"),
                VersionCell::new(1, "1.1", ""),
            ]
        );
    }

    #[test]
    fn normalize_keeps_separate_runs_of_the_same_version() {
        let cells = normalize(&["3.0", "2.0", "3.0"], "3.0");

        assert_eq!(
            cells,
            vec![
                VersionCell::new(1, "3.0", "2.0"),
                VersionCell::new(1, "2.0", "3.0"),
                VersionCell::new(1, "3.0", "3.0"),
            ]
        );
        assert_eq!(cells[0].class(), Class::Upgrade);
    }

    #[test]
    fn normalize_treats_missing_versions_as_a_run() {
        let cells = normalize(&["", "", "5.1"], "5.1");

        assert_eq!(
            cells,
            vec![
                VersionCell::new(2, "", "5.1"),
                VersionCell::new(1, "5.1", "5.1"),
            ]
        );
    }

    #[test]
    fn normalize_accepts_owned_strings() {
        let columns = vec!["4.1".to_string(), "4.1".to_string()];
        assert_eq!(
            normalize(&columns, "4.2"),
            vec![VersionCell::new(2, "4.1", "4.2")]
        );
    }

    #[rstest]
    #[case("1.0", "1.0", Class::Unchanged, "")]
    #[case("1.0~rc1", "1.0", Class::Downgrade, "downgrade")]
    #[case("1.0^git1", "1.0", Class::Upgrade, "upgrade")]
    #[case("2.0", "", Class::Upgrade, "upgrade")]
    fn class_compares_version_to_base(
        #[case] version: &str,
        #[case] base: &str,
        #[case] expected: Class,
        #[case] label: &str,
    ) {
        let cell = VersionCell::new(1, version, base);
        assert_eq!(cell.class(), expected);
        assert_eq!(cell.class().as_str(), label);
    }
}
