// src/store.rs
//! The canonical table for one run.
//!
//! First write wins: once a key is in, later candidates for it are dropped,
//! even when they carry a better name. Determinism beats completeness here,
//! since source pages overlap and disagree.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::config::consts::FallbackDef;
use crate::model::{CandidateRecord, Identifier, Provenance, Row, identity_key};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergeStore {
    table: BTreeMap<String, CandidateRecord>,
}

impl MergeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store under the uppercased identifier unless that key is taken.
    /// Returns whether the record was kept.
    pub fn insert(&mut self, record: CandidateRecord) -> bool {
        let key = record.identity_key();
        self.insert_keyed(key, record)
    }

    fn insert_keyed(&mut self, key: String, record: CandidateRecord) -> bool {
        match self.table.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(record);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Insert in iteration order; returns how many were kept.
    pub fn extend<I: IntoIterator<Item = CandidateRecord>>(&mut self, records: I) -> usize {
        let mut kept = 0;
        for record in records {
            if self.insert(record) { kept += 1; }
        }
        kept
    }

    /// Add the generic device-class rows that are still missing.
    pub fn seed_fallbacks(&mut self, defs: &[FallbackDef]) -> usize {
        let mut added = 0;
        for def in defs {
            let record = CandidateRecord {
                identifier: Identifier::new(def.identifier),
                manufacturer: def.manufacturer.to_string(),
                friendly_name: def.friendly_name.to_string(),
                device_family: def.family,
                provenance: Provenance::Fallback,
            };
            if self.insert_keyed(def.key.to_string(), record) {
                added += 1;
            }
        }
        added
    }

    /// Lookup by table key, any casing. Scraped records are keyed by their
    /// uppercased identifier; fallback rows only by their reserved key
    /// (`IOS_DEVICE`), not by their identifier (`ios device`).
    pub fn get(&self, key: &str) -> Option<&CandidateRecord> {
        self.table.get(&identity_key(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }

    /// Emission rows, sorted by key.
    pub fn rows(&self) -> Vec<Row> {
        self.table.values().map(CandidateRecord::to_row).collect()
    }
}
