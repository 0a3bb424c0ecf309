//! Summary data-quality statistics over an ingested [`Table`].

use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::error::{ProfileError, ProfileResult};
use crate::types::{Table, Value};

/// The six summary statistics behind the dashboard's indicator row.
///
/// Derived once per [`Table`], read-only. Fractions are stored as fractions
/// (0.05, not 5.0); see [`QualityReport::indicators`] for percentage rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityReport {
    /// Number of data rows.
    pub rows: usize,
    /// Number of columns.
    pub columns: usize,
    /// Number of null-marker cells across the whole table.
    pub empty_cells: usize,
    /// `empty_cells / (rows * columns)`.
    pub empty_cell_fraction: f64,
    /// Rows whose full value sequence matches an earlier row (all but first occurrence).
    pub duplicate_rows: usize,
    /// `duplicate_rows / rows`.
    pub duplicate_row_fraction: f64,
}

impl QualityReport {
    /// Compute the report in two full-table scans (null count, then duplicate scan).
    ///
    /// A zero-row or zero-column table is rejected with
    /// [`ProfileError::DegenerateInput`], since the fractions are undefined there.
    ///
    /// ```
    /// use data_profiler::ingestion::{ingest_upload, IngestOptions};
    /// use data_profiler::quality::QualityReport;
    ///
    /// # fn main() -> Result<(), data_profiler::ProfileError> {
    /// let upload = b"a,b\n1,x\n2,\n1,x\n";
    /// let table = ingest_upload(upload, "data.csv", &IngestOptions::default())?;
    /// let report = QualityReport::compute(&table)?;
    /// assert_eq!(report.rows, 3);
    /// assert_eq!(report.empty_cells, 1);
    /// assert_eq!(report.duplicate_rows, 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn compute(table: &Table) -> ProfileResult<Self> {
        let rows = table.row_count();
        let columns = table.column_count();
        if rows == 0 || columns == 0 {
            return Err(ProfileError::DegenerateInput { rows, columns });
        }

        let empty_cells = table
            .columns
            .iter()
            .flat_map(|c| c.cells.iter())
            .filter(|v| v.is_null())
            .count();
        let duplicate_rows = count_duplicate_rows(table);

        Ok(Self {
            rows,
            columns,
            empty_cells,
            empty_cell_fraction: empty_cells as f64 / (rows * columns) as f64,
            duplicate_rows,
            duplicate_row_fraction: duplicate_rows as f64 / rows as f64,
        })
    }

    /// The report as a metric-name → value mapping, in dashboard order.
    pub fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("Rows", self.rows as f64),
            ("Columns", self.columns as f64),
            ("Empty Cells", self.empty_cells as f64),
            ("% Empty Cells", self.empty_cell_fraction),
            ("Duplicate Rows", self.duplicate_rows as f64),
            ("% Duplicate Rows", self.duplicate_row_fraction),
        ]
    }
}

fn count_duplicate_rows(table: &Table) -> usize {
    let rows = table.row_count();
    let mut seen: HashSet<RowKey<'_>> = HashSet::with_capacity(rows);
    let mut duplicates = 0;
    for idx in 0..rows {
        let key = RowKey(table.columns.iter().map(|c| &c.cells[idx]).collect());
        if !seen.insert(key) {
            duplicates += 1;
        }
    }
    duplicates
}

/// One row's cells, hashable so the duplicate scan can use a set.
///
/// Floats are compared and hashed by bit pattern, which makes the relation a proper
/// equivalence (NaN cells compare equal to themselves, like any other marker).
struct RowKey<'a>(Vec<&'a Value>);

impl PartialEq for RowKey<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .zip(other.0.iter())
                .all(|(a, b)| value_eq(a, b))
    }
}

impl Eq for RowKey<'_> {}

impl Hash for RowKey<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for v in &self.0 {
            hash_value(v, state);
        }
    }
}

fn value_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Int64(x), Value::Int64(y)) => x == y,
        (Value::Float64(x), Value::Float64(y)) => x.to_bits() == y.to_bits(),
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Utf8(x), Value::Utf8(y)) => x == y,
        _ => false,
    }
}

fn hash_value<H: Hasher>(v: &Value, state: &mut H) {
    match v {
        Value::Null => state.write_u8(0),
        Value::Int64(x) => {
            state.write_u8(1);
            x.hash(state);
        }
        Value::Float64(x) => {
            state.write_u8(2);
            x.to_bits().hash(state);
        }
        Value::Bool(x) => {
            state.write_u8(3);
            x.hash(state);
        }
        Value::Utf8(x) => {
            state.write_u8(4);
            x.hash(state);
        }
    }
}
