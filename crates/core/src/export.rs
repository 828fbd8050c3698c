//! CSV rendering for table exports.
//!
//! Output follows RFC 4180: every field is double-quoted, embedded quotes
//! are doubled, and rows are joined with CRLF.

use serde_json::Value;

/// Quote one cell for a CSV row.
pub fn csv_field(raw: &str) -> String {
    format!("\"{}\"", raw.replace('"', "\"\""))
}

/// Render a header row plus data rows into a CSV document.
pub fn csv_document(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        header
            .iter()
            .map(|h| csv_field(h))
            .collect::<Vec<_>>()
            .join(","),
    );
    for row in rows {
        lines.push(
            row.iter()
                .map(|cell| csv_field(cell))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\r\n")
}

/// Flatten a JSON value into the string a CSV cell shows.
///
/// Arrays of scalars (tags, skills) join with `"; "`; nested objects and
/// nulls render empty.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) | Some(Value::Object(_)) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("; "),
    }
}
