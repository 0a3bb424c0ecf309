//! Spreadsheet ingestion implementation.
//!
//! The format dispatch pins an engine per extension: `.xlsx` uses the OOXML reader,
//! `.xls` the legacy binary (BIFF) reader. Both read the first worksheet only.

use std::io::{Cursor, Read, Seek};

use calamine::{Data, Range, Reader, Xls, Xlsx};

use crate::error::{ProfileError, ProfileResult};
use crate::ingestion::csv::check_unique_names;
use crate::types::{Column, ColumnType, Table, Value};

/// Parse OOXML workbook bytes (`.xlsx`) into an in-memory [`Table`].
pub fn parse_xlsx(bytes: &[u8]) -> ProfileResult<Table> {
    let workbook = Xlsx::new(Cursor::new(bytes)).map_err(|e| ProfileError::MalformedInput {
        message: e.to_string(),
    })?;
    first_sheet_table(workbook)
}

/// Parse legacy binary workbook bytes (`.xls`) into an in-memory [`Table`].
pub fn parse_xls(bytes: &[u8]) -> ProfileResult<Table> {
    let workbook = Xls::new(Cursor::new(bytes)).map_err(|e| ProfileError::MalformedInput {
        message: e.to_string(),
    })?;
    first_sheet_table(workbook)
}

fn first_sheet_table<RS, R>(mut workbook: R) -> ProfileResult<Table>
where
    RS: Read + Seek,
    R: Reader<RS>,
    R::Error: std::fmt::Display,
{
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ProfileError::EmptyInput)?
        .map_err(|e| ProfileError::MalformedInput {
            message: e.to_string(),
        })?;
    table_from_range(&range)
}

fn table_from_range(range: &Range<Data>) -> ProfileResult<Table> {
    let mut rows = range.rows();
    let header = rows.next().ok_or(ProfileError::EmptyInput)?;

    let names: Vec<String> = header.iter().map(cell_to_header_string).collect();
    if names.iter().all(|n| n.is_empty()) {
        return Err(ProfileError::EmptyInput);
    }
    check_unique_names(&names)?;

    let mut raw: Vec<Vec<Value>> = vec![Vec::new(); names.len()];
    for row in rows {
        for (idx, cells) in raw.iter_mut().enumerate() {
            let cell = row.get(idx).unwrap_or(&Data::Empty);
            cells.push(convert_cell(cell));
        }
    }

    let columns = names
        .into_iter()
        .zip(raw)
        .map(|(name, cells)| {
            let (column_type, cells) = unify_column(cells);
            Column::new(name, column_type, cells)
        })
        .collect();
    Ok(Table::new(columns))
}

fn cell_to_header_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.trim().to_owned(),
        Data::Float(f) if f.fract() == 0.0 => (*f as i64).to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn convert_cell(c: &Data) -> Value {
    match c {
        Data::Empty => Value::Null,
        Data::Int(i) => Value::Int64(*i),
        Data::Float(f) => Value::Float64(*f),
        Data::Bool(b) => Value::Bool(*b),
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Value::Null
            } else {
                Value::Utf8(trimmed.to_owned())
            }
        }
        // Dates, durations and cell errors surface as their text form.
        other => Value::Utf8(other.to_string()),
    }
}

/// Unify a column's cell types into one [`ColumnType`].
///
/// Integers widen to float when mixed with floats; anything mixed with text
/// collapses to text (cells are stringified so the column stays homogeneous).
fn unify_column(cells: Vec<Value>) -> (ColumnType, Vec<Value>) {
    let mut saw_int = false;
    let mut saw_float = false;
    let mut saw_bool = false;
    let mut saw_text = false;
    for cell in &cells {
        match cell {
            Value::Null => {}
            Value::Int64(_) => saw_int = true,
            Value::Float64(_) => saw_float = true,
            Value::Bool(_) => saw_bool = true,
            Value::Utf8(_) => saw_text = true,
        }
    }

    let homogeneous_numeric = !saw_text && !saw_bool;
    if saw_text || (saw_bool && (saw_int || saw_float)) {
        let cells = cells.into_iter().map(stringify).collect();
        (ColumnType::Utf8, cells)
    } else if homogeneous_numeric && saw_float {
        let cells = cells
            .into_iter()
            .map(|c| match c {
                Value::Int64(i) => Value::Float64(i as f64),
                other => other,
            })
            .collect();
        (ColumnType::Float64, cells)
    } else if homogeneous_numeric && saw_int {
        (ColumnType::Int64, cells)
    } else if saw_bool {
        (ColumnType::Bool, cells)
    } else {
        // All null.
        (ColumnType::Utf8, cells)
    }
}

fn stringify(v: Value) -> Value {
    match v {
        Value::Null => Value::Null,
        Value::Int64(i) => Value::Utf8(i.to_string()),
        Value::Float64(f) => Value::Utf8(f.to_string()),
        Value::Bool(b) => Value::Utf8(b.to_string()),
        utf8 @ Value::Utf8(_) => utf8,
    }
}
