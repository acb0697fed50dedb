//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `release`: Resolve, export and compress in one run

pub mod release;
