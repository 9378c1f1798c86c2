//! Ingestion, egress and synthetic generation.
//!
//! These are the thin shims around the matching engine:
//!
//! - [`reader`]: CSV files -> demand / supply records
//! - [`writer`]: ranked matches -> CSV or an aligned table, and records -> CSV
//! - [`generate`]: seeded synthetic demand / supply records
//!
//! ## Dataset Layout
//!
//! A dataset is a directory holding two CSV files:
//!
//! ```text
//! <datasets-dir>/<dataset>/demands.csv    id,title,required_skills
//! <datasets-dir>/<dataset>/supplies.csv   id,name,skills
//! ```
//!
//! Capability columns use the `", "` delimiter inside a quoted CSV field,
//! e.g. `1,Ruby Developer,"Ruby, SQL, Problem Solving"`.

pub mod generate;
pub mod reader;
pub mod writer;

use std::path::PathBuf;

use thiserror::Error;

pub use generate::RecordGenerator;
pub use reader::{read_demands, read_demands_from_path, read_supplies, read_supplies_from_path};
pub use writer::{write_csv, write_demands, write_matches, write_supplies, write_table, OutputFormat};

/// File name of the demand side of a dataset
pub const DEMANDS_FILE: &str = "demands.csv";

/// File name of the supply side of a dataset
pub const SUPPLIES_FILE: &str = "supplies.csv";

/// Column headers of a demand file
pub const DEMAND_COLUMNS: [&str; 3] = ["id", "title", "required_skills"];

/// Column headers of a supply file
pub const SUPPLY_COLUMNS: [&str; 3] = ["id", "name", "skills"];

// ============================================================================
// Errors
// ============================================================================

/// Errors raised while reading record files
#[derive(Debug, Error)]
pub enum IngestError {
    /// The file could not be opened
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV stream was malformed or a field had the wrong type
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A row did not have exactly three fields
    #[error("line {line}: expected 3 fields (id, label, capabilities), found {found}")]
    FieldCount { line: u64, found: usize },

    /// Record ids start at 1
    #[error("line {line}: record id must be >= 1, found {id}")]
    InvalidId { line: u64, id: u64 },
}

/// Errors raised while writing matches or records
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),
}

/// An output format selector named no known writer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown writer {name:?}; expected one of: {}", OutputFormat::NAMES.join(", "))]
pub struct UnknownFormatError {
    pub name: String,
}
