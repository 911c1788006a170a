// src/extract/records.rs
//! One document's text → candidate records.
//!
//! Emission order is pattern order, then left-to-right within a pattern.
//! The merge store keeps the first candidate per key, so this order is
//! observable in the output and must stay stable.

use tracing::debug;

use super::namer::infer_name;
use super::patterns::{Pattern, PatternRegistry};
use crate::config::consts::WINDOW_RADIUS;
use crate::error::Result;
use crate::model::{CandidateRecord, Identifier, Provenance};

pub struct Extractor {
    registry: PatternRegistry,
    window_radius: usize,
}

impl Extractor {
    pub fn new(registry: PatternRegistry) -> Self {
        Self { registry, window_radius: WINDOW_RADIUS }
    }

    pub fn builtin() -> Result<Self> {
        Ok(Self::new(PatternRegistry::builtin()?))
    }

    pub fn with_window_radius(mut self, radius: usize) -> Self {
        self.window_radius = radius;
        self
    }

    /// All candidates in `text`, tagged with `provenance`. Pure.
    pub fn extract(&self, text: &str, provenance: &str) -> Vec<CandidateRecord> {
        let mut out = Vec::new();
        for pattern in self.registry.iter() {
            let before = out.len();
            self.extract_pattern(pattern, text, provenance, &mut out);
            debug!(source = provenance, pattern = pattern.label, matches = out.len() - before, "pattern scanned");
        }
        out
    }

    fn extract_pattern(&self, pattern: &Pattern, text: &str, provenance: &str, out: &mut Vec<CandidateRecord>) {
        for caps in pattern.matcher.captures_iter(text) {
            let Some(m) = caps.get(1) else { continue };

            let friendly_name = pattern
                .namer
                .as_ref()
                .and_then(|re| infer_name(text, m.range(), self.window_radius, re))
                .unwrap_or_else(|| pattern.fallback_name.to_string());

            out.push(CandidateRecord {
                identifier: Identifier::new(m.as_str().trim()),
                manufacturer: pattern.manufacturer.to_string(),
                friendly_name,
                device_family: pattern.family,
                provenance: Provenance::Scraped(provenance.to_string()),
            });
        }
    }
}
