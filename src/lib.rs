// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod extract;
pub mod model;

pub mod file;
pub mod lookup;
pub mod progress;
pub mod runner;
pub mod store;
pub mod table;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod log;

pub use error::{Error, FetchError, Result};
pub use model::{CandidateRecord, DeviceFamily, Identifier, Provenance, Row};
pub use store::MergeStore;
