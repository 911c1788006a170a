// src/extract/mod.rs
//! # Identifier extraction
//!
//! Text in, candidate records out. Nothing here fetches, stores or writes.
//!
//! ```text
//! runner → core::html::to_text → Extractor::extract → MergeStore::insert
//!                                 ├─ patterns (what is an identifier)
//!                                 └─ namer    (what is it called)
//! ```
//!
//! The registry decides *what* is an identifier and which vendor/family it
//! implies; the namer guesses a friendly name from nearby text; the extractor
//! glues them together in a fixed order.

pub mod namer;
pub mod patterns;
pub mod records;

pub use patterns::{PatternDef, PatternRegistry};
pub use records::Extractor;
