// src/extract/patterns.rs
//! Identifier recognizers, in priority order.
//!
//! Every entry runs over the whole text; matches from different entries are
//! never suppressed against each other (`SAMSUNG-SM-G991B` yields both an
//! `SM-` and a `SAMSUNG-` candidate). Entry order is part of the dedup
//! contract: it decides which candidate reaches the merge store first.
//!
//! Vendor-prefixed codes match case-insensitively. The Apple pair does not:
//! the `Name12,3` shape is what separates it from prose.

use regex::Regex;

use crate::error::Result;
use crate::model::DeviceFamily;

pub struct PatternDef {
    pub label: &'static str,
    /// Capture group 1 is the identifier.
    pub matcher: &'static str,
    pub manufacturer: &'static str,
    pub family: DeviceFamily,
    /// Secondary pattern searched near each match for a friendly name.
    pub namer: Option<&'static str>,
    /// Used when there is no namer, or it finds nothing.
    pub fallback_name: &'static str,
}

// Secondary name patterns. Horizontal whitespace only: a name never spans
// the line breaks `core::html::to_text` puts between blocks.

/// Capitalized run, e.g. "Phone 13 Pro" out of "iPhone 13 Pro".
pub const CAPITALIZED_RUN: &str = r"[A-Z][A-Za-z0-9 \t\-]{2,60}";
/// "Galaxy S21 Ultra", "galaxy Tab S8+".
pub const GALAXY_FAMILY: &str = r"[Gg]alaxy[ \t]+[A-Za-z0-9+ \t]+";

pub const BUILTIN: &[PatternDef] = &[
    PatternDef {
        label: "apple",
        matcher: r"\b([A-Za-z]+\d+,\d+)\b",
        manufacturer: "Apple",
        family: DeviceFamily::Ios,
        namer: Some(CAPITALIZED_RUN),
        fallback_name: "",
    },
    PatternDef {
        label: "samsung_sm",
        matcher: r"(?i)\b(SM-[A-Z0-9-]+)\b",
        manufacturer: "Samsung",
        family: DeviceFamily::Android,
        namer: Some(GALAXY_FAMILY),
        fallback_name: "Samsung device",
    },
    PatternDef {
        label: "samsung_gt",
        matcher: r"(?i)\b(GT-[A-Z0-9-]+)\b",
        manufacturer: "Samsung",
        family: DeviceFamily::Android,
        namer: None,
        fallback_name: "Samsung device",
    },
    PatternDef {
        label: "samsung_prefixed",
        matcher: r"(?i)\b(SAMSUNG-[A-Z0-9-]+)\b",
        manufacturer: "Samsung",
        family: DeviceFamily::Android,
        namer: None,
        fallback_name: "Samsung device",
    },
];

/// A compiled `PatternDef`.
pub struct Pattern {
    pub label: &'static str,
    pub matcher: Regex,
    pub manufacturer: &'static str,
    pub family: DeviceFamily,
    pub namer: Option<Regex>,
    pub fallback_name: &'static str,
}

impl Pattern {
    pub fn compile(def: &PatternDef) -> Result<Self> {
        Ok(Self {
            label: def.label,
            matcher: Regex::new(def.matcher)?,
            manufacturer: def.manufacturer,
            family: def.family,
            namer: def.namer.map(Regex::new).transpose()?,
            fallback_name: def.fallback_name,
        })
    }
}

pub struct PatternRegistry {
    patterns: Vec<Pattern>,
}

impl PatternRegistry {
    pub fn new(defs: &[PatternDef]) -> Result<Self> {
        let patterns = defs.iter().map(Pattern::compile).collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn builtin() -> Result<Self> {
        Self::new(BUILTIN)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }
}
