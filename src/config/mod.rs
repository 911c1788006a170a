// src/config/mod.rs

pub mod consts;
pub mod options;
pub mod sources;

pub use options::{ExportFormat, ExportOptions, RunOptions};
pub use sources::Source;
