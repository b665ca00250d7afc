// ============================================================
// TABLE TYPES
// ============================================================
// Rows of a submitted table and the request that carries them

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single table row: column name -> scalar value.
pub type Row = Map<String, Value>;

/// Ordered collection of rows. Order only matters for per-entry statistics.
pub type Dataset = Vec<Row>;

/// Keyword statistics request as submitted by a client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordStatsRequest {
    pub table_name: String,
    pub data: Dataset,
    /// Column to analyze
    pub column: String,
    /// Strategy name; absent or null selects the simple strategy
    #[serde(default)]
    pub algorithm: Option<String>,
}

/// Coerce a cell to its textual form.
///
/// Returns `None` for null so callers can skip the cell entirely.
pub fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        // Nested values are not expected in a table cell, keep them readable
        other => Some(other.to_string()),
    }
}
