//! Filesystem areas a packaging run touches
//!
//! - `project`: the source-controlled directory and the git process run inside it
//! - `staging`: the directory the changed files are copied into
//! - `archive`: the zip file the staging directory is compressed into
//! - `package`: coordination of the three plus progress output

pub mod archive;
pub mod package;
pub mod project;
pub mod staging;
