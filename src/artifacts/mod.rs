//! Data types shared by the packaging stages
//!
//! - `core`: error taxonomy and verbosity
//! - `diff`: diff filters, change sets and quoted path decoding
//! - `options`: run configuration and the output layout derived from it

pub mod core;
pub mod diff;
pub mod options;
