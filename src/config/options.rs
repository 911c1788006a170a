// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;
use super::sources::{self, Source};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub sources: Vec<Source>,
    pub export: ExportOptions,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            sources: sources::builtin(),
            export: ExportOptions::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    dir: PathBuf,
    file_stem: OsString,
    /// Extension the user typed, if any. Wins over the format's default.
    user_ext: Option<OsString>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            user_ext: None,
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        let mut name = self.file_stem.clone();
        name.push(".");
        match &self.user_ext {
            Some(ext) => name.push(ext),
            None => name.push(self.format.ext()),
        }
        self.dir.join(name)
    }

    /// Split a user-supplied path into dir + stem (+ explicit extension).
    pub fn set_path(&mut self, text: impl AsRef<Path>) {
        let p = text.as_ref();
        self.dir = p.parent().map(Path::to_path_buf).unwrap_or_default();
        if let Some(stem) = p.file_stem() {
            self.file_stem = stem.to_os_string();
        }
        self.user_ext = p.extension().map(|e| e.to_os_string());
    }
}
