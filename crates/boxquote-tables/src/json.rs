//! # JSON Directory Reader
//!
//! Reads table regions exported in the spreadsheet values shape, one file
//! per region:
//!
//! ```text
//! tables/
//! ├── printing_raw.json                  {"range": "printing_raw",
//! ├── primary_secondary_addon_raw.json    "values": [["", "1colour", "art card 300gsm",
//! └── third_addon_raw.json                            "A4", 500, "120.00"], ...]}
//! ```
//!
//! Cells are coerced to strings: numbers print as JSON does, except that
//! integral floats drop their fraction (`500.0` → `"500"`) so they still
//! match quantity tiers. Booleans become `TRUE`/`FALSE`, null an empty cell.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, info};

use boxquote_core::{PriceRow, PriceTable, TableId};

use crate::error::{TableError, TableResult};
use crate::reader::{TableNames, TableReader};

/// One exported range. Other keys (`range`, `majorDimension`) are ignored.
#[derive(Debug, Deserialize)]
struct ValueRange {
    /// Absent when the range is empty.
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

/// Reads `<dir>/<range>.json` per table.
#[derive(Debug, Clone)]
pub struct JsonDirectoryReader {
    dir: PathBuf,
    names: TableNames,
}

impl JsonDirectoryReader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        JsonDirectoryReader {
            dir: dir.into(),
            names: TableNames::default(),
        }
    }

    /// Overrides the range names.
    pub fn with_names(mut self, names: TableNames) -> Self {
        self.names = names;
        self
    }

    /// File a table is read from.
    pub fn path_for(&self, id: TableId) -> PathBuf {
        self.dir.join(format!("{}.json", self.names.name(id)))
    }
}

#[async_trait]
impl TableReader for JsonDirectoryReader {
    async fn read(&self, id: TableId) -> TableResult<PriceTable> {
        let name = self.names.name(id);
        let path = self.path_for(id);
        debug!(table = %id, path = %path.display(), "Reading price table");

        let raw = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => TableError::NotFound {
                    table: name.to_string(),
                    location: path.display().to_string(),
                },
                _ => TableError::Io {
                    table: name.to_string(),
                    message: e.to_string(),
                },
            })?;

        let table = parse_value_range(id, name, &raw)?;
        info!(table = %id, rows = table.rows().len(), "Price table loaded");
        Ok(table)
    }
}

/// Parses one exported range into a price table.
pub fn parse_value_range(id: TableId, name: &str, raw: &str) -> TableResult<PriceTable> {
    let range: ValueRange = serde_json::from_str(raw).map_err(|e| TableError::Malformed {
        table: name.to_string(),
        message: e.to_string(),
    })?;

    let rows = range
        .values
        .into_iter()
        .map(|cells| {
            cells
                .into_iter()
                .map(|cell| coerce_cell(name, cell))
                .collect::<TableResult<Vec<String>>>()
                .map(PriceRow::new)
        })
        .collect::<TableResult<Vec<PriceRow>>>()?;

    Ok(PriceTable::new(id, rows))
}

fn coerce_cell(table: &str, cell: Value) -> TableResult<String> {
    match cell {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(number_cell(&n)),
        Value::Bool(true) => Ok("TRUE".to_string()),
        Value::Bool(false) => Ok("FALSE".to_string()),
        Value::Null => Ok(String::new()),
        other => Err(TableError::Malformed {
            table: table.to_string(),
            message: format!("unsupported cell value {other}"),
        }),
    }
}

/// Largest magnitude an f64 holds with every integer exact.
const EXACT_F64_INTEGER: f64 = 9_007_199_254_740_992.0;

fn number_cell(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() <= EXACT_F64_INTEGER => {
            format!("{f:.0}")
        }
        _ => n.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
