//! Result formatting for executed pipeline prefixes.
//!
//! Two output shapes, mirroring what an engineer wants while stepping
//! through a pipeline: a bordered table for eyeballing intermediate
//! rows, and JSON for feeding the same rows into other tooling.

use comfy_table::{Table, presets::UTF8_FULL};
use serde_json::Value;

use crate::client::ResultSet;

/// Render rows as a bordered UTF-8 table with the column names as the
/// header.
pub fn render_table(result: &ResultSet) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(result.columns.clone());

    for row in &result.rows {
        table.add_row(row.iter().map(cell_text));
    }

    table.to_string()
}

/// Render rows as a pretty-printed JSON array of column-keyed objects.
pub fn render_json(result: &ResultSet) -> String {
    let rows: Vec<Value> = result
        .rows
        .iter()
        .map(|row| {
            let object = result
                .columns
                .iter()
                .cloned()
                .zip(row.iter().cloned())
                .collect::<serde_json::Map<String, Value>>();
            Value::Object(object)
        })
        .collect();

    serde_json::to_string_pretty(&Value::Array(rows)).unwrap()
}

/// Flatten a JSON scalar to bare cell text: strings lose their quotes,
/// nulls render empty.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
