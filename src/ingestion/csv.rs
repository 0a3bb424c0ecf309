//! CSV ingestion implementation.

use crate::error::{ProfileError, ProfileResult};
use crate::types::{Column, ColumnType, Table, Value};

/// Parse CSV bytes into an in-memory [`Table`].
///
/// Rules:
///
/// - The first row is the header (column names). Header names must be unique.
/// - Empty cells become [`Value::Null`].
/// - Each column's type is inferred from its non-null cells: integer, then float,
///   then bool (`true`/`false`), falling back to text.
/// - A record with a different field count than the header is malformed.
pub fn parse_csv(bytes: &[u8]) -> ProfileResult<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);

    let headers = rdr
        .headers()
        .map_err(|e| ProfileError::MalformedInput {
            message: e.to_string(),
        })?
        .clone();
    let names: Vec<String> = headers.iter().map(|h| h.trim().to_owned()).collect();
    if names.is_empty() || names.iter().all(|n| n.is_empty()) {
        return Err(ProfileError::EmptyInput);
    }
    check_unique_names(&names)?;

    // Collect raw cells column-wise first; types are inferred once the column is complete.
    let mut raw: Vec<Vec<Option<String>>> = vec![Vec::new(); names.len()];
    for result in rdr.records() {
        let record = result.map_err(|e| ProfileError::MalformedInput {
            message: e.to_string(),
        })?;
        for (idx, cells) in raw.iter_mut().enumerate() {
            let trimmed = record.get(idx).unwrap_or("").trim();
            cells.push(if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_owned())
            });
        }
    }

    let columns = names
        .into_iter()
        .zip(raw)
        .map(|(name, cells)| infer_column(name, cells))
        .collect();
    Ok(Table::new(columns))
}

pub(crate) fn check_unique_names(names: &[String]) -> ProfileResult<()> {
    for (idx, name) in names.iter().enumerate() {
        if names[..idx].contains(name) {
            return Err(ProfileError::MalformedInput {
                message: format!("duplicate column name '{name}'"),
            });
        }
    }
    Ok(())
}

fn infer_column(name: String, cells: Vec<Option<String>>) -> Column {
    if cells.iter().all(|c| c.is_none()) {
        let nulls = vec![Value::Null; cells.len()];
        return Column::new(name, ColumnType::Utf8, nulls);
    }
    if let Some(values) = try_parse_all(&cells, |s| s.parse::<i64>().ok().map(Value::Int64)) {
        return Column::new(name, ColumnType::Int64, values);
    }
    if let Some(values) = try_parse_all(&cells, |s| s.parse::<f64>().ok().map(Value::Float64)) {
        return Column::new(name, ColumnType::Float64, values);
    }
    if let Some(values) = try_parse_all(&cells, |s| parse_bool(s).map(Value::Bool)) {
        return Column::new(name, ColumnType::Bool, values);
    }
    let values = cells
        .into_iter()
        .map(|c| c.map_or(Value::Null, Value::Utf8))
        .collect();
    Column::new(name, ColumnType::Utf8, values)
}

/// Parse every non-null cell with `parse`; `None` if any cell is rejected.
fn try_parse_all<F>(cells: &[Option<String>], parse: F) -> Option<Vec<Value>>
where
    F: Fn(&str) -> Option<Value>,
{
    let mut out = Vec::with_capacity(cells.len());
    for cell in cells {
        match cell {
            None => out.push(Value::Null),
            Some(s) => out.push(parse(s)?),
        }
    }
    Some(out)
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
