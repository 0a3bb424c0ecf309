//! Core data model types.
//!
//! Ingestion parses an upload into an in-memory [`Table`]: an ordered sequence of
//! named [`Column`]s, each holding one [`Value`] per row. Column types are inferred
//! at parse time rather than declared up front.

/// Logical type inferred for a [`Column`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point number.
    Float64,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    Utf8,
}

/// A single cell value in a [`Table`].
///
/// `Null` is the missing-cell marker: it is distinct from the empty string and from
/// any parsed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty cell.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
}

impl Value {
    /// Returns `true` for the missing-cell marker.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// A named column of cells, all of the inferred [`ColumnType`] (or [`Value::Null`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name, from the header row.
    pub name: String,
    /// Inferred logical type of the non-null cells.
    pub column_type: ColumnType,
    /// Cells in source row order.
    pub cells: Vec<Value>,
}

impl Column {
    /// Create a new column.
    pub fn new(name: impl Into<String>, column_type: ColumnType, cells: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            column_type,
            cells,
        }
    }
}

/// In-memory tabular result of parsing an upload.
///
/// Columns are ordered as in the source; every column holds the same number of
/// cells, and row order is preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Ordered columns.
    pub columns: Vec<Column>,
}

impl Table {
    /// Create a table from columns.
    ///
    /// # Panics
    ///
    /// Panics if the columns have differing lengths.
    pub fn new(columns: Vec<Column>) -> Self {
        if let Some(first) = columns.first() {
            let expected = first.cells.len();
            for c in &columns {
                assert!(
                    c.cells.len() == expected,
                    "column '{}' has {} cells, expected {}",
                    c.name,
                    c.cells.len(),
                    expected
                );
            }
        }
        Self { columns }
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.cells.len())
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Iterate column names in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Returns the index of a column by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Returns a column by name, if present.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.index_of(name).map(|i| &self.columns[i])
    }

    /// Returns row `idx` as one cell reference per column, or `None` past the end.
    pub fn row(&self, idx: usize) -> Option<Vec<&Value>> {
        if idx >= self.row_count() {
            return None;
        }
        Some(self.columns.iter().map(|c| &c.cells[idx]).collect())
    }
}
