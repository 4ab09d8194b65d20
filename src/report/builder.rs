//! Turning the versions document into display rows

use serde::Serialize;
use tracing::{debug, warn};

use crate::report::error::ReportError;
use crate::report::source::VersionsSource;
use crate::report::types::{PackageVersions, VersionsDocument};
use crate::version::cell::{VersionCell, normalize};

/// Upstream versions shown at the end of a row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpstreamCell {
    pub latest: String,
    pub stable: String,
}

impl UpstreamCell {
    /// Latest and stable are the same release, shown once.
    pub fn is_single(&self) -> bool {
        self.latest == self.stable
    }
}

/// One package of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRow {
    pub name: String,
    /// Bootstrap version, classified against the newest release column
    pub bootstrap: VersionCell,
    /// Release columns collapsed into runs, classified against upstream stable
    pub releases: Vec<VersionCell>,
    pub upstream: UpstreamCell,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub hostname: String,
    pub time_generated: String,
    /// Release column names in display order
    pub columns: Vec<String>,
    pub rows: Vec<PackageRow>,
}

/// Group name with the number of packages it lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    pub name: String,
    pub packages: usize,
}

/// Build the row for one package from its per-release versions.
pub fn package_row(name: &str, versions: &PackageVersions, columns: &[String]) -> PackageRow {
    let observed: Vec<&str> = columns
        .iter()
        .map(|column| versions.fedora_version(column))
        .collect();

    let newest_release = observed.last().copied().unwrap_or("");

    PackageRow {
        name: name.to_string(),
        bootstrap: VersionCell::new(1, versions.bootstrap.as_str(), newest_release),
        releases: normalize(&observed, &versions.upstream.stable),
        upstream: UpstreamCell {
            latest: versions.upstream.latest.clone(),
            stable: versions.upstream.stable.clone(),
        },
    }
}

/// Build the report for all packages, or only for those of `group`.
pub fn build_report(doc: &VersionsDocument, group: Option<&str>) -> Result<Report, ReportError> {
    let members = match group {
        Some(name) => {
            let members = doc
                .groups
                .get(name)
                .ok_or_else(|| ReportError::GroupNotFound(name.to_string()))?;

            for missing in members.iter().filter(|m| !doc.versions.contains_key(*m)) {
                warn!("Package {} of group {} has no version data", missing, name);
            }

            Some(members)
        }
        None => None,
    };

    let rows: Vec<PackageRow> = doc
        .versions
        .iter()
        .filter(|(name, _)| members.is_none_or(|m| m.contains(*name)))
        .map(|(name, versions)| package_row(name, versions, &doc.columns.fedora))
        .collect();

    debug!("Built report with {} rows", rows.len());

    Ok(Report {
        hostname: doc.hostname.clone(),
        time_generated: doc.time_generated.clone(),
        columns: doc.columns.fedora.clone(),
        rows,
    })
}

/// Fetch the document from `source` and build the report.
pub async fn load_report<S: VersionsSource + ?Sized>(
    source: &S,
    group: Option<&str>,
) -> Result<Report, ReportError> {
    let doc = source.fetch().await?;
    build_report(&doc, group)
}

/// List groups in name order.
pub fn list_groups(doc: &VersionsDocument) -> Vec<GroupSummary> {
    doc.groups
        .iter()
        .map(|(name, packages)| GroupSummary {
            name: name.clone(),
            packages: packages.len(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::source::MockVersionsSource;
    use crate::version::cell::Class;
    use serde_json::json;

    fn fixture() -> VersionsDocument {
        serde_json::from_value(json!({
            "hostname": "local",
            "time-generated": "Tue Oct  1 12:00:00 2024",
            "version-columns": { "fedora": ["f40", "f41", "f42"] },
            "versions": {
                "junit": {
                    "fedora": { "f40": "4.13.2", "f41": "4.13.2", "f42": "4.13.2" },
                    "upstream": { "latest": "4.13.2", "latest-stable": "4.13.2" },
                    "jp-bootstrap": "4.13.2"
                },
                "maven": {
                    "fedora": { "f40": "3.9.1", "f41": "3.9.6", "f42": "3.9.6" },
                    "upstream": { "latest": "4.0.0~rc2", "latest-stable": "3.9.9" },
                    "jp-bootstrap": "3.9.9"
                },
                "ant": {
                    "fedora": { "f40": "1.10.14", "f42": "1.10.15" },
                    "upstream": { "latest": "1.10.15", "latest-stable": "1.10.15" },
                    "jp-bootstrap": "1.10.14"
                }
            },
            "groups": {
                "build": ["ant", "maven"],
                "testing": ["junit", "hamcrest"]
            }
        }))
        .unwrap()
    }

    #[test]
    fn package_row_collapses_release_columns() {
        let doc = fixture();
        let row = package_row("maven", &doc.versions["maven"], &doc.columns.fedora);

        assert_eq!(
            row.releases,
            vec![
                VersionCell::new(1, "3.9.1", "3.9.6"),
                VersionCell::new(2, "3.9.6", "3.9.9"),
            ]
        );
        assert_eq!(row.releases[1].class(), Class::Downgrade);
        assert!(!row.upstream.is_single());
    }

    #[test]
    fn package_row_classifies_bootstrap_against_newest_release() {
        let doc = fixture();
        let row = package_row("maven", &doc.versions["maven"], &doc.columns.fedora);

        assert_eq!(row.bootstrap, VersionCell::new(1, "3.9.9", "3.9.6"));
        assert_eq!(row.bootstrap.class(), Class::Upgrade);
    }

    #[test]
    fn package_row_treats_missing_column_as_empty_version() {
        let doc = fixture();
        let row = package_row("ant", &doc.versions["ant"], &doc.columns.fedora);

        assert_eq!(
            row.releases,
            vec![
                VersionCell::new(1, "1.10.14", ""),
                VersionCell::new(1, "", "1.10.15"),
                VersionCell::new(1, "1.10.15", "1.10.15"),
            ]
        );
        assert!(row.upstream.is_single());
    }

    #[test]
    fn package_row_without_columns_has_no_release_cells() {
        let doc = fixture();
        let row = package_row("junit", &doc.versions["junit"], &[]);

        assert!(row.releases.is_empty());
        assert_eq!(row.bootstrap, VersionCell::new(1, "4.13.2", ""));
    }

    #[test]
    fn build_report_lists_all_packages_in_name_order() {
        let report = build_report(&fixture(), None).unwrap();

        let names: Vec<&str> = report.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["ant", "junit", "maven"]);
        assert_eq!(report.columns, vec!["f40", "f41", "f42"]);
        assert_eq!(report.hostname, "local");
    }

    #[test]
    fn build_report_filters_by_group() {
        let report = build_report(&fixture(), Some("testing")).unwrap();

        let names: Vec<&str> = report.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["junit"]);
    }

    #[test]
    fn build_report_rejects_unknown_group() {
        let result = build_report(&fixture(), Some("runtime"));
        assert!(matches!(result, Err(ReportError::GroupNotFound(name)) if name == "runtime"));
    }

    #[test]
    fn list_groups_counts_members() {
        assert_eq!(
            list_groups(&fixture()),
            vec![
                GroupSummary {
                    name: "build".to_string(),
                    packages: 2,
                },
                GroupSummary {
                    name: "testing".to_string(),
                    packages: 2,
                },
            ]
        );
    }

    #[tokio::test]
    async fn load_report_builds_from_fetched_document() {
        let mut source = MockVersionsSource::new();
        source
            .expect_fetch()
            .times(1)
            .returning(|| Ok(fixture()));

        let report = load_report(&source, Some("build")).await.unwrap();

        let names: Vec<&str> = report.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["ant", "maven"]);
    }

    #[tokio::test]
    async fn load_report_propagates_fetch_error() {
        let mut source = MockVersionsSource::new();
        source
            .expect_fetch()
            .times(1)
            .returning(|| Err(ReportError::InvalidDocument("truncated".to_string())));

        let result = load_report(&source, None).await;

        assert!(matches!(result, Err(ReportError::InvalidDocument(_))));
    }
}
