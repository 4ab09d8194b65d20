//! Version ordering and normalization
//!
//! Everything in this module is pure: functions take strings and return
//! fresh values, so they can be called from any thread without locking.
//!
//! # Modules
//!
//! - [`rpmvercmp`]: RPM-style three-way version comparison
//! - [`cell`]: Run-length cells for a row of per-release versions
//! - [`upstream`]: Rewriting upstream version spellings into RPM form
//! - [`error`]: Error types for upstream normalization

pub mod cell;
pub mod error;
pub mod rpmvercmp;
pub mod upstream;

pub use cell::{Class, VersionCell, normalize};
pub use rpmvercmp::{compare, vercmp};
