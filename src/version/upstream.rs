//! Upstream version normalization
//!
//! Upstream projects spell pre-releases in many ways (`2.5.0-rc1`, `1.0b3`,
//! `3.0.0.M1`, ...). To compare them with packaged versions they are rewritten
//! into RPM form, where a pre-release suffix is introduced by `~`:
//!
//! - `_` and `-` become `.` (`3_2_12` -> `3.2.12`)
//! - a `.Final` suffix is dropped (`1.0.1.Final` -> `1.0.1`)
//! - a single trailing letter is kept (`0.11b` -> `0.11b`)
//! - service packs stay post-release (`2.0.SP1` -> `2.0.SP1`)
//! - any other suffix becomes a pre-release (`6.0-alpha-2` -> `6.0~alpha.2`)

use regex::Regex;

use crate::version::error::VersionError;

/// Newest upstream versions of a project, already normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamVersions {
    pub latest: String,
    /// Newest version without a pre-release suffix, if any
    pub latest_stable: Option<String>,
}

pub struct UpstreamNormalizer {
    /// Numeric release part followed by whatever suffix remains
    release_re: Regex,
}

impl UpstreamNormalizer {
    pub fn new() -> Self {
        Self {
            release_re: Regex::new(r"(?s)^([.0-9]*[0-9]+)(.*)$").unwrap(),
        }
    }

    /// Rewrite an upstream version into RPM-comparable form.
    ///
    /// An empty version stays empty. A version that does not start with a
    /// numeric release is rejected.
    pub fn normalize(&self, version: &str) -> Result<String, VersionError> {
        if version.is_empty() {
            return Ok(String::new());
        }

        let dotted = version.replace(['_', '-'], ".");
        let caps = self
            .release_re
            .captures(&dotted)
            .ok_or_else(|| VersionError::InvalidVersion(dotted.clone()))?;

        let release = &caps[1];
        let suffix = &caps[2];

        if suffix == ".Final" {
            return Ok(release.to_string());
        }

        if suffix.is_empty() || (suffix.len() == 1 && suffix.as_bytes()[0].is_ascii_alphabetic())
        {
            return Ok(dotted.clone());
        }

        let suffix = suffix.strip_prefix(['.', '~']).unwrap_or(suffix);

        let marker = if suffix.starts_with("SP") { '.' } else { '~' };

        Ok(format!("{release}{marker}{suffix}"))
    }

    /// Pick the newest stable version from a newest-first list.
    ///
    /// Versions that cannot be normalized are skipped.
    pub fn latest_stable<S: AsRef<str>>(&self, versions: &[S]) -> Option<String> {
        versions
            .iter()
            .filter_map(|v| self.normalize(v.as_ref()).ok())
            .find(|v| !v.contains('~'))
    }

    /// Summarize a newest-first list of raw upstream versions.
    ///
    /// Returns `Ok(None)` for an empty list. The stable version is omitted
    /// when it is the latest version itself.
    pub fn summarize<S: AsRef<str>>(
        &self,
        versions: &[S],
    ) -> Result<Option<UpstreamVersions>, VersionError> {
        let Some(newest) = versions.first() else {
            return Ok(None);
        };

        let latest = self.normalize(newest.as_ref())?;
        let latest_stable = self.latest_stable(versions).filter(|stable| *stable != latest);

        Ok(Some(UpstreamVersions {
            latest,
            latest_stable,
        }))
    }
}

impl Default for UpstreamNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
