use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("Invalid version name: {0}")]
    InvalidVersion(String),
}
