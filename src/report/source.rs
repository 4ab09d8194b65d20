//! Sources of the versions document

#[cfg(test)]
use mockall::automock;

use tracing::{debug, warn};

use crate::config::Config;
use crate::report::error::ReportError;
use crate::report::types::VersionsDocument;

/// Trait for obtaining the versions document
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionsSource: Send + Sync {
    /// Fetches the current document
    async fn fetch(&self) -> Result<VersionsDocument, ReportError>;
}

/// Fetches `versions.json` over HTTP
pub struct HttpVersionsSource {
    client: reqwest::Client,
    url: String,
}

impl HttpVersionsSource {
    pub fn new(config: &Config) -> Result<Self, ReportError> {
        let client = reqwest::Client::builder()
            .user_agent("pkg-versions")
            .timeout(config.fetch_timeout())
            .build()?;

        Ok(Self {
            client,
            url: config.versions_json_url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl VersionsSource for HttpVersionsSource {
    async fn fetch(&self) -> Result<VersionsDocument, ReportError> {
        debug!("Fetching versions document from {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("versions document returned status {}: {}", status, self.url);
            return Err(ReportError::Status(status));
        }

        let document: VersionsDocument = response.json().await.map_err(|e| {
            warn!("Failed to parse versions document: {}", e);
            ReportError::InvalidDocument(e.to_string())
        })?;

        debug!(
            "Fetched {} packages in {} groups",
            document.versions.len(),
            document.groups.len()
        );

        Ok(document)
    }
}
