use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP GET failed: {0}")]
    Status(reqwest::StatusCode),

    #[error("Invalid versions document: {0}")]
    InvalidDocument(String),

    #[error("Group not found: {0}")]
    GroupNotFound(String),
}
