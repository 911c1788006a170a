// src/table.rs
//! Fixed-schema tabular encoding of the canonical table.
//!
//! Columns: identifier, manufacturer, friendly_name, device_family, note.
//! The header row is always present, even for an empty table. Records end in
//! CRLF, the line ending existing consumers of the mapping file expect.

use std::io::{Read, Write};

use crate::config::ExportFormat;
use crate::config::consts::COLUMNS;
use crate::error::Result;
use crate::model::Row;
use crate::store::MergeStore;

/* ---------------- Writing ---------------- */

/// Header + rows, in the order given.
pub fn write_rows<W: Write>(w: W, rows: &[Row], format: ExportFormat) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(format.delim())
        .has_headers(false) // written by hand so empty tables still get one
        .terminator(csv::Terminator::CRLF)
        .from_writer(w);

    wtr.write_record(COLUMNS)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Whole store, key-sorted, as bytes ready for a single write.
pub fn to_bytes(store: &MergeStore, format: ExportFormat) -> Result<Vec<u8>> {
    let mut buf: Vec<u8> = Vec::new();
    write_rows(&mut buf, &store.rows(), format)?;
    Ok(buf)
}

/* ---------------- Reading ---------------- */

pub fn read_rows<R: Read>(r: R, format: ExportFormat) -> Result<Vec<Row>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(format.delim())
        .has_headers(true)
        .from_reader(r);

    let mut rows = Vec::new();
    for row in rdr.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}
