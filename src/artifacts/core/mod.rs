//! Shared types used by every stage of a packaging run
//!
//! - `error`: the `PackageError` taxonomy and its exit codes
//! - `Verbosity`: how much diagnostic output a run produces

pub mod error;

/// Diagnostic level threaded through the stages via `PackageOptions`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    #[default]
    Normal,
    Debug,
}

impl Verbosity {
    pub fn is_debug(&self) -> bool {
        matches!(self, Verbosity::Debug)
    }
}

impl From<bool> for Verbosity {
    fn from(debug: bool) -> Self {
        if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}
