use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Serialize a command response in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Raw => serde_json::to_string(value)?,
        OutputFormat::Table => {
            let (headers, rows) = tabulate(serde_json::to_value(value)?);
            if rows.is_empty() {
                String::from("(no rows)")
            } else {
                let prefs = ui::prefs();
                let headers = headers.iter().map(String::as_str).collect::<Vec<_>>();
                table::render_entity_table(
                    &headers,
                    &rows,
                    table::TableOptions {
                        max_width: prefs.term_width,
                        color: prefs.table_color,
                    },
                )
            }
        }
    })
}

/// Print a command response to stdout.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

/// Flatten a JSON response into table headers and rows.
///
/// A list of objects becomes one row per object. An object wrapping exactly
/// one list (`{"recipes": [...]}`) is treated as that list. Any other object
/// becomes key/value pairs.
fn tabulate(value: Value) -> (Vec<String>, Vec<Vec<String>>) {
    match value {
        Value::Array(items) => tabulate_list(&items),
        Value::Object(map) if map.len() == 1 && map.values().all(Value::is_array) => {
            let items = map.into_iter().next().map(|(_, v)| v).unwrap_or_default();
            tabulate(items)
        }
        Value::Object(map) => (
            vec!["key".into(), "value".into()],
            map.into_iter()
                .map(|(key, value)| vec![key, cell(&value)])
                .collect(),
        ),
        scalar => (vec!["value".into()], vec![vec![cell(&scalar)]]),
    }
}

fn tabulate_list(items: &[Value]) -> (Vec<String>, Vec<Vec<String>>) {
    let objects: Vec<Map<String, Value>> = items
        .iter()
        .filter_map(|item| item.as_object().cloned())
        .collect();
    if objects.len() != items.len() {
        return (
            vec!["value".into()],
            items.iter().map(|item| vec![cell(item)]).collect(),
        );
    }

    let mut headers = Vec::<String>::new();
    for key in objects.iter().flat_map(Map::keys) {
        if !headers.contains(key) {
            headers.push(key.clone());
        }
    }
    let rows = objects
        .iter()
        .map(|object| {
            headers
                .iter()
                .map(|header| object.get(header).map_or_else(|| "-".into(), cell))
                .collect()
        })
        .collect();
    (headers, rows)
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => "-".into(),
        Value::String(text) => text.clone(),
        Value::Array(items) => format!("[{}]", items.len()),
        Value::Bool(_) | Value::Number(_) | Value::Object(_) => value.to_string(),
    }
}
