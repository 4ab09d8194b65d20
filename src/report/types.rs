//! Model of the `versions.json` document published by the collector

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

/// The whole document. Packages are kept in name order.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct VersionsDocument {
    pub versions: BTreeMap<String, PackageVersions>,
    #[serde(rename = "version-columns")]
    pub columns: VersionColumns,
    #[serde(deserialize_with = "null_as_empty")]
    pub hostname: String,
    #[serde(rename = "time-generated", deserialize_with = "null_as_empty")]
    pub time_generated: String,
    pub groups: BTreeMap<String, Vec<String>>,
}

/// Display order of the per-release columns
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct VersionColumns {
    pub fedora: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PackageVersions {
    pub upstream: UpstreamRelease,
    /// Version pinned in javapackages-bootstrap
    #[serde(rename = "jp-bootstrap", deserialize_with = "null_as_empty")]
    pub bootstrap: String,
    /// Version per Fedora release column; untagged packages are empty or null
    pub fedora: BTreeMap<String, Option<String>>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct UpstreamRelease {
    #[serde(deserialize_with = "null_as_empty")]
    pub latest: String,
    #[serde(rename = "latest-stable", deserialize_with = "null_as_empty")]
    pub stable: String,
}

impl PackageVersions {
    /// Version in a release column, empty when the package is not tagged there.
    pub fn fedora_version(&self, column: &str) -> &str {
        self.fedora
            .get(column)
            .and_then(|v| v.as_deref())
            .unwrap_or("")
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
