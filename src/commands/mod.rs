//! Packaging command implementations
//!
//! Split the same way git splits its own commands:
//!
//! - `plumbing`: the individual stages (resolve, export, compress)
//! - `porcelain`: `release`, which runs the stages in order
//!
//! Each command is an `impl Package` block, so every stage reads its inputs
//! from the `Package` it runs on instead of shared state.

pub mod plumbing;
pub mod porcelain;
