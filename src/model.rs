// src/model.rs
//! Record types shared by the extractor, the merge store and the emitter.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A device model code as it appeared in the source text.
///
/// Display form keeps the original casing; identity is the uppercased form,
/// so `iphone14,2` and `iPhone14,2` collapse to one table entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn key(&self) -> String {
        identity_key(&self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Case-normalized dedup key.
pub fn identity_key(s: &str) -> String {
    s.to_uppercase()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceFamily {
    Ios,
    Android,
}

impl DeviceFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceFamily::Ios => "ios device",
            DeviceFamily::Android => "android device",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ios device" => Some(DeviceFamily::Ios),
            "android device" => Some(DeviceFamily::Android),
            _ => None,
        }
    }
}

impl fmt::Display for DeviceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Provenance {
    /// Label of the source document the record was extracted from.
    Scraped(String),
    Fallback,
}

impl Provenance {
    pub fn note(&self) -> String {
        match self {
            Provenance::Scraped(label) => format!("scraped from {label}"),
            Provenance::Fallback => "fallback".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateRecord {
    pub identifier: Identifier,
    pub manufacturer: String,
    pub friendly_name: String,
    pub device_family: DeviceFamily,
    pub provenance: Provenance,
}

impl CandidateRecord {
    pub fn identity_key(&self) -> String {
        self.identifier.key()
    }

    pub fn to_row(&self) -> Row {
        Row {
            identifier: self.identifier.as_str().to_string(),
            manufacturer: self.manufacturer.clone(),
            friendly_name: self.friendly_name.clone(),
            device_family: self.device_family.as_str().to_string(),
            note: self.provenance.note(),
        }
    }
}

/// One emitted line. Field order is the column order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub identifier: String,
    pub manufacturer: String,
    pub friendly_name: String,
    pub device_family: String,
    pub note: String,
}

impl Row {
    pub fn is_fallback(&self) -> bool {
        self.note == "fallback"
    }
}
