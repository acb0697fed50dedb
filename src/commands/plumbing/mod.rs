//! Plumbing commands (single pipeline stages)
//!
//! ## Commands
//!
//! - `resolve`: List the files changed between two revisions
//! - `export`: Copy the changed files into the staging directory
//! - `compress`: Zip the staging directory

pub mod compress;
pub mod export;
pub mod resolve;
