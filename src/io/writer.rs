//! Egress: render ranked matches, and write generated records back to CSV.
//!
//! ## Formats
//!
//! | Format | Layout |
//! |--------|--------|
//! | `csv` | header row, then one row per match |
//! | `table` | aligned columns, dashed rule, blank line, `(N rows)` |
//!
//! The CSV writer streams; the table writer has to see every row first to
//! size its columns, so prefer `csv` for very large result sets.

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use csv::WriterBuilder;
use serde::Serialize;

use crate::io::{UnknownFormatError, WriteError, DEMAND_COLUMNS, SUPPLY_COLUMNS};
use crate::types::{DemandRecord, MatchTuple, SupplyRecord, MATCH_COLUMNS};

// ============================================================================
// Output format
// ============================================================================

/// How ranked matches are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Comma-separated values with a header row
    #[default]
    Csv,
    /// Human-readable aligned table with a trailing row count
    Table,
}

impl OutputFormat {
    /// Canonical selector names
    pub const NAMES: [&'static str; 2] = ["csv", "table"];

    /// Canonical selector name
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Table => "table",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = UnknownFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(OutputFormat::Csv),
            // "tabulate" is kept as an alias for the table writer
            "table" | "tabulate" => Ok(OutputFormat::Table),
            other => Err(UnknownFormatError {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Match egress
// ============================================================================

/// Render matches in the chosen format
pub fn write_matches<W: Write>(
    out: W,
    matches: &[MatchTuple],
    format: OutputFormat,
) -> Result<(), WriteError> {
    match format {
        OutputFormat::Csv => write_csv(out, matches),
        OutputFormat::Table => write_table(out, matches),
    }
}

/// Write matches as CSV with a header row
pub fn write_csv<W: Write>(out: W, matches: &[MatchTuple]) -> Result<(), WriteError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(out);
    writer.write_record(MATCH_COLUMNS)?;
    for m in matches {
        writer.write_record(m.to_fields())?;
    }
    writer.flush()?;
    Ok(())
}

/// Numeric columns are right-aligned
const RIGHT_ALIGNED: [bool; 6] = [true, false, true, false, true, true];

/// Column separator in table output
const GAP: &str = "  ";

/// Write matches as an aligned table followed by a row count
pub fn write_table<W: Write>(mut out: W, matches: &[MatchTuple]) -> Result<(), WriteError> {
    let rows: Vec<[String; 6]> = matches.iter().map(MatchTuple::to_fields).collect();

    let mut widths: [usize; 6] = MATCH_COLUMNS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = MATCH_COLUMNS.map(str::to_string);
    write_table_row(&mut out, &header, &widths)?;

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(out, "{}", rule.join(GAP))?;

    for row in &rows {
        write_table_row(&mut out, row, &widths)?;
    }

    writeln!(out)?;
    writeln!(out, "({} rows)", rows.len())?;
    out.flush()?;
    Ok(())
}

fn write_table_row<W: Write>(out: &mut W, cells: &[String; 6], widths: &[usize; 6]) -> Result<(), WriteError> {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str(GAP);
        }
        let pad = widths[i].saturating_sub(cell.chars().count());
        if RIGHT_ALIGNED[i] {
            line.push_str(&" ".repeat(pad));
            line.push_str(cell);
        } else {
            line.push_str(cell);
            line.push_str(&" ".repeat(pad));
        }
    }
    writeln!(out, "{}", line.trim_end())?;
    Ok(())
}

// ============================================================================
// Record egress (generated datasets)
// ============================================================================

#[derive(Serialize)]
struct RecordRow<'a> {
    id: u64,
    label: &'a str,
    capabilities: String,
}

fn write_rows<'a, W, I>(out: W, columns: [&str; 3], rows: I) -> Result<(), WriteError>
where
    W: Write,
    I: IntoIterator<Item = RecordRow<'a>>,
{
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(out);
    writer.write_record(columns)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write demand records as `id,title,required_skills`
pub fn write_demands<W: Write>(out: W, demands: &[DemandRecord]) -> Result<(), WriteError> {
    write_rows(
        out,
        DEMAND_COLUMNS,
        demands.iter().map(|d| RecordRow {
            id: d.id,
            label: &d.label,
            capabilities: d.required.to_text(),
        }),
    )
}

/// Write supply records as `id,name,skills`
pub fn write_supplies<W: Write>(out: W, supplies: &[SupplyRecord]) -> Result<(), WriteError> {
    write_rows(
        out,
        SUPPLY_COLUMNS,
        supplies.iter().map(|s| RecordRow {
            id: s.id,
            label: &s.label,
            capabilities: s.possessed.to_text(),
        }),
    )
}

/// Create (or truncate) a file for writing
pub fn create_file(path: &Path) -> Result<File, WriteError> {
    File::create(path).map_err(|source| WriteError::Create {
        path: path.to_path_buf(),
        source,
    })
}

// ============================================================================
// Unit Tests
// ============================================================================
