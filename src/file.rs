// src/file.rs

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::config::ExportFormat;
use crate::error::{Error, Result};
use crate::model::Row;
use crate::store::MergeStore;
use crate::table;

/// Serialize the whole table, then replace `path` in one write.
/// Nothing touches the disk until encoding has succeeded.
pub fn write_table(path: &Path, store: &MergeStore, format: ExportFormat) -> Result<PathBuf> {
    let contents = table::to_bytes(store, format)?;

    let wrap = |source| Error::OutputWrite { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(wrap)?;
        }
    }
    fs::write(path, contents).map_err(wrap)?;

    info!(path = %path.display(), rows = store.len(), "table written");
    Ok(path.to_path_buf())
}

/// Load a previously written table. `.tsv` files are tab-separated.
pub fn read_table(path: &Path) -> Result<Vec<Row>> {
    let file = fs::File::open(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
    table::read_rows(io::BufReader::new(file), format_for(path))
}

pub fn format_for(path: &Path) -> ExportFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") => ExportFormat::Tsv,
        _ => ExportFormat::Csv,
    }
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
