//! Anki CSV export
//!
//! Records are ordered by occurrence count, most frequent first, and written
//! as `Expression,Reading,Meaning` rows.

use std::cmp::Reverse;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ExportError, ExportResult};
use crate::models::{ExportRow, VocabularyRecord};

/// Sort by occurrence count, descending; ties keep their input order
pub fn sort_for_export(mut records: Vec<VocabularyRecord>) -> Vec<VocabularyRecord> {
    records.sort_by_key(|r| Reverse(r.occurrence_count()));
    records
}

/// Write the header and one row per record; returns the number of rows
pub fn write_anki_csv<W: Write>(records: &[VocabularyRecord], writer: W) -> ExportResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    // serialize() derives the header from the first row
    if records.is_empty() {
        csv_writer.write_record(ExportRow::HEADER)?;
    }
    for record in records {
        csv_writer.serialize(ExportRow::from(record))?;
    }
    csv_writer
        .flush()
        .map_err(|e| ExportError::Export(e.to_string()))?;

    Ok(records.len())
}

/// Create `path` and write the records to it
pub fn export_anki_csv(records: &[VocabularyRecord], path: &Path) -> ExportResult<usize> {
    let file = File::create(path).map_err(|e| {
        ExportError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;

    let rows = write_anki_csv(records, BufWriter::new(file))?;
    tracing::info!(path = %path.display(), rows, "csv written");
    Ok(rows)
}
