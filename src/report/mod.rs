//! Version report built from the collector's `versions.json`
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Source    │────▶│   Builder   │────▶│   Render    │
//! │  (fetch)    │     │ (normalize) │     │ (text/json) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`]: Serde model of the versions document
//! - [`source`]: Trait and HTTP implementation for fetching the document
//! - [`builder`]: Per-package rows with run-length release cells
//! - [`render`]: Plain-text table and JSON output
//! - [`error`]: Error types for fetching and building reports

pub mod builder;
pub mod error;
pub mod render;
pub mod source;
pub mod types;
