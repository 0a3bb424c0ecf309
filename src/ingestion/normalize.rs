//! Best-effort numeric normalization for locale-formatted decimal columns.

use crate::types::{ColumnType, Table, Value};

/// Reinterpret text columns whose cells are decimal numbers with a comma separator
/// (e.g. `"3,14"`), converting the whole column to [`ColumnType::Float64`].
///
/// The pass is column-independent and best-effort: if any non-null cell in a column
/// fails the coercion, that column is left untouched. Non-text columns and columns
/// with no non-null cells are skipped. Returns the names of converted columns, in
/// table order.
pub fn normalize_decimal_separators(table: &mut Table) -> Vec<String> {
    let mut changed = Vec::new();
    for column in &mut table.columns {
        if column.column_type != ColumnType::Utf8 {
            continue;
        }
        if let Some(coerced) = coerce_decimal_cells(&column.cells) {
            column.cells = coerced;
            column.column_type = ColumnType::Float64;
            changed.push(column.name.clone());
        }
    }
    changed
}

/// Coerce every non-null text cell by treating `,` as the decimal separator.
/// `None` if any cell is rejected or the column holds no values.
fn coerce_decimal_cells(cells: &[Value]) -> Option<Vec<Value>> {
    let mut out = Vec::with_capacity(cells.len());
    let mut saw_value = false;
    for cell in cells {
        match cell {
            Value::Null => out.push(Value::Null),
            Value::Utf8(s) => {
                let parsed: f64 = s.replace(',', ".").parse().ok()?;
                out.push(Value::Float64(parsed));
                saw_value = true;
            }
            _ => return None,
        }
    }
    saw_value.then_some(out)
}
