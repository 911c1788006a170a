// src/lookup.rs
//! Resolve raw identifiers or platform strings against an emitted table.
//!
//! Accepts either a bare code (`sm-g991b`) or a client platform string with
//! the model in parentheses (`iOS 17.1 (iPhone14,2)`). Unknown models fall
//! back to the generic row for the platform's family when one can be guessed.

use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;
use crate::file;
use crate::model::{DeviceFamily, Row, identity_key};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Fallback,
}

#[derive(Debug, Default)]
pub struct DeviceMap {
    rows: Vec<Row>,
    by_key: HashMap<String, usize>,
    fallback: HashMap<DeviceFamily, usize>,
}

impl DeviceMap {
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::from_rows(file::read_table(path)?))
    }

    pub fn from_rows(rows: Vec<Row>) -> Self {
        let mut by_key = HashMap::with_capacity(rows.len());
        let mut fallback = HashMap::new();
        for (i, row) in rows.iter().enumerate() {
            if row.is_fallback() {
                if let Some(family) = DeviceFamily::parse(&row.device_family) {
                    fallback.entry(family).or_insert(i);
                }
                continue;
            }
            by_key.entry(identity_key(&row.identifier)).or_insert(i);
        }
        Self { rows, by_key, fallback }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, identifier: &str) -> Option<&Row> {
        self.by_key.get(&identity_key(identifier.trim())).map(|&i| &self.rows[i])
    }

    pub fn lookup(&self, query: &str) -> Option<(&Row, MatchKind)> {
        let model = device_model(query);
        // "samsung, SM-G991B": whole string first (Apple codes contain commas), then pieces
        let exact = std::iter::once(model)
            .chain(model.split([',', ' ']).map(str::trim))
            .filter(|s| !s.is_empty())
            .find_map(|s| self.get(s));
        if let Some(row) = exact {
            return Some((row, MatchKind::Exact));
        }
        let family = guess_family(query)?;
        self.fallback.get(&family).map(|&i| (&self.rows[i], MatchKind::Fallback))
    }
}

/// `"Android OS 13 (SM-G991B)"` → `"SM-G991B"`; no parentheses → the input.
pub fn device_model(platform: &str) -> &str {
    let inner = platform
        .find('(')
        .and_then(|o| platform[o + 1..].find(')').map(|c| &platform[o + 1..o + 1 + c]));
    match inner {
        Some(m) if !m.trim().is_empty() => m.trim(),
        _ => platform.trim(),
    }
}

fn guess_family(query: &str) -> Option<DeviceFamily> {
    let lc = query.to_ascii_lowercase();
    const IOS: &[&str] = &["ios", "iphone", "ipad", "ipod", "appletv"];
    const ANDROID: &[&str] = &["android", "sm-", "gt-", "samsung"];
    if IOS.iter().any(|t| lc.contains(t)) {
        Some(DeviceFamily::Ios)
    } else if ANDROID.iter().any(|t| lc.contains(t)) {
        Some(DeviceFamily::Android)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_from_platform_string() {
        assert_eq!(device_model("iOS 17.1 (iPhone14,2)"), "iPhone14,2");
        assert_eq!(device_model("Android OS 13 API 33 (samsung, SM-G991B)"), "samsung, SM-G991B");
        assert_eq!(device_model(" SM-G991B "), "SM-G991B");
        assert_eq!(device_model("weird ()"), "weird ()");
    }

    #[test]
    fn family_guess() {
        assert_eq!(guess_family("iOS 16"), Some(DeviceFamily::Ios));
        assert_eq!(guess_family("Android 12"), Some(DeviceFamily::Android));
        assert_eq!(guess_family("PlayStation 5"), None);
    }
}
