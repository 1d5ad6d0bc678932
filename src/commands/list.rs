use prettytable::{row, Table};
use serde_json::{Map, Value};
use crate::util::{preview, type_name};

/// Print the top-level keys as a table, optionally filtered by a
/// case-insensitive substring of the key.
pub fn list_keys(doc: &Map<String, Value>, filter: Option<&str>) {
    let needle = filter.map(|f| f.to_lowercase());
    let mut rows: Vec<(&String, &Value)> = doc
        .iter()
        .filter(|(k, _)| match &needle {
            Some(n) => k.to_lowercase().contains(n.as_str()),
            None => true,
        })
        .collect();
    if rows.is_empty() {
        println!("No keys match.");
        return;
    }
    rows.sort_by(|a, b| a.0.cmp(b.0));

    let mut table = Table::new();
    table.add_row(row!["Key", "Type", "Value"]);
    for (k, v) in rows {
        table.add_row(row![k, type_name(v), preview(v, 60)]);
    }
    table.printstd();
}
