//! CSV ingestion of demand and supply records.
//!
//! Rows are read positionally as `id, label, capabilities`, so header names
//! are never consulted. The first row is skipped when `skip_header` is set.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;

use crate::io::IngestError;
use crate::types::{CapabilitySet, DemandRecord, SupplyRecord};

/// One ingested row before capability parsing
#[derive(Debug, Deserialize)]
struct RawRow {
    id: u64,
    label: String,
    capabilities: String,
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

fn read_rows<R: Read>(reader: R, skip_header: bool) -> Result<Vec<RawRow>, IngestError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(skip_header)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = line_of(&record);

        if record.len() != 3 {
            return Err(IngestError::FieldCount {
                line,
                found: record.len(),
            });
        }

        let row: RawRow = record.deserialize(None)?;
        if row.id == 0 {
            return Err(IngestError::InvalidId { line, id: row.id });
        }
        rows.push(row);
    }

    Ok(rows)
}

/// Read demand records (`id, title, required_skills`) from a CSV stream
pub fn read_demands<R: Read>(reader: R, skip_header: bool) -> Result<Vec<DemandRecord>, IngestError> {
    let demands: Vec<DemandRecord> = read_rows(reader, skip_header)?
        .into_iter()
        .map(|row| DemandRecord::new(row.id, row.label, CapabilitySet::parse(&row.capabilities)))
        .collect();

    tracing::debug!(count = demands.len(), "read demand records");
    Ok(demands)
}

/// Read supply records (`id, name, skills`) from a CSV stream
pub fn read_supplies<R: Read>(reader: R, skip_header: bool) -> Result<Vec<SupplyRecord>, IngestError> {
    let supplies: Vec<SupplyRecord> = read_rows(reader, skip_header)?
        .into_iter()
        .map(|row| SupplyRecord::new(row.id, row.label, CapabilitySet::parse(&row.capabilities)))
        .collect();

    tracing::debug!(count = supplies.len(), "read supply records");
    Ok(supplies)
}

fn open(path: &Path) -> Result<File, IngestError> {
    File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Read demand records from a file
pub fn read_demands_from_path(path: &Path, skip_header: bool) -> Result<Vec<DemandRecord>, IngestError> {
    tracing::info!(path = %path.display(), "reading demands");
    read_demands(open(path)?, skip_header)
}

/// Read supply records from a file
pub fn read_supplies_from_path(path: &Path, skip_header: bool) -> Result<Vec<SupplyRecord>, IngestError> {
    tracing::info!(path = %path.display(), "reading supplies");
    read_supplies(open(path)?, skip_header)
}

// ============================================================================
// Unit Tests
// ============================================================================
