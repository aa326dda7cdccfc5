//! Output rendering for controller snapshots.
//!
//! # Submodules
//!
//! - [`text`]: human-readable terminal rendering
//! - [`json`]: machine-readable JSON rendering (`--format json`)
//!
//! Both render the same read-only [`Snapshot`](crate::controller::Snapshot);
//! nothing here reaches back into the controller or triggers fetches.

pub mod json;
pub mod text;
