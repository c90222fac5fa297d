//! Markdown post-processing for generated text.
//!
//! Two best-effort passes: re-flowing pipe-delimited rows into well-formed
//! table rows, and rendering `{"headers": [...], "rows": [...]}` snippets as
//! Markdown tables. Neither pass fails; input it cannot handle is left as is.

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::sync::LazyLock;

static TABLE_JSON_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```table_json\s*\n(.*?)\n```").expect("table_json block pattern")
});

// Cannot see through nested braces; objects with them are left alone.
static LOOSE_TABLE_OBJECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\{[^{}]*"headers"\s*:\s*\[[^\]]+\][^{}]*"rows"\s*:\s*\[[^\]]+\][^{}]*\}"#)
        .expect("loose table object pattern")
});

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JsonTable {
    #[serde(default)]
    pub headers: Vec<Value>,
    #[serde(default)]
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TableRow {
    Cells(Vec<Value>),
    Scalar(Value),
}

impl TableRow {
    fn cells(&self) -> Vec<&Value> {
        match self {
            TableRow::Cells(cells) => cells.iter().collect(),
            TableRow::Scalar(value) => vec![value],
        }
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn table_row(cells: &[String]) -> String {
    if cells.is_empty() {
        return "| |".to_string();
    }
    format!("| {} |", cells.join(" | "))
}

/// Renders a table description as Markdown. Rows are padded or truncated to
/// the header count. Returns `None` when there are no headers.
pub fn json_table_to_markdown(table: &JsonTable) -> Option<String> {
    if table.headers.is_empty() {
        return None;
    }

    let width = table.headers.len();
    let mut lines = Vec::with_capacity(table.rows.len() + 2);

    let headers: Vec<String> = table.headers.iter().map(cell_text).collect();
    lines.push(table_row(&headers));
    lines.push(table_row(&vec!["---".to_string(); width]));

    for row in &table.rows {
        let mut cells: Vec<String> = row.cells().into_iter().map(cell_text).collect();
        cells.resize(width, String::new());
        lines.push(table_row(&cells));
    }

    Some(lines.join("\n"))
}

/// Replaces every match of `pattern` whose JSON (capture group `group`)
/// renders as a table. Works back to front so earlier offsets stay valid.
fn replace_table_matches(text: &str, pattern: &Regex, group: usize, kind: &str) -> String {
    let spans: Vec<(usize, usize, String)> = pattern
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let json = caps.get(group)?.as_str().trim().to_string();
            Some((whole.start(), whole.end(), json))
        })
        .collect();

    let mut output = text.to_string();
    for (start, end, json) in spans.into_iter().rev() {
        let table: JsonTable = match serde_json::from_str(&json) {
            Ok(table) => table,
            Err(e) => {
                tracing::warn!("Failed to parse {} table JSON: {}", kind, e);
                continue;
            }
        };

        if let Some(markdown) = json_table_to_markdown(&table) {
            output.replace_range(start..end, &markdown);
            tracing::info!("Converted {} JSON table to markdown", kind);
        }
    }

    output
}

/// Finds `table_json` fenced blocks, then bare header/rows objects, and
/// renders each as a Markdown table. Unparseable snippets stay untouched.
pub fn extract_and_convert_json_tables(text: &str) -> String {
    let text = replace_table_matches(text, &TABLE_JSON_BLOCK, 1, "fenced");
    replace_table_matches(&text, &LOOSE_TABLE_OBJECT, 0, "standalone")
}

fn is_separator_cell(cell: &str) -> bool {
    !cell.is_empty() && cell.chars().all(|c| c == '-' || c == ':' || c.is_whitespace())
}

fn clean_table_line(line: &str) -> String {
    let mut parts: Vec<&str> = line.split('|').collect();

    if parts.first().is_some_and(|p| p.trim().is_empty()) {
        parts.remove(0);
    }
    if parts.last().is_some_and(|p| p.trim().is_empty()) {
        parts.pop();
    }

    let cells: Vec<&str> = parts.iter().map(|p| p.trim()).collect();

    let is_separator = cells
        .iter()
        .filter(|cell| !cell.is_empty())
        .all(|cell| is_separator_cell(cell));

    if is_separator {
        table_row(&vec!["---".to_string(); cells.len()])
    } else {
        let cells: Vec<String> = cells.into_iter().map(str::to_string).collect();
        table_row(&cells)
    }
}

/// Re-flows every line containing `|` into a `| a | b |` row and rewrites
/// separator rows as `| --- | --- |`. Other lines pass through unchanged and
/// the line count is preserved.
pub fn clean_markdown_tables(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.contains('|') {
                clean_table_line(line)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn normalize_markdown(text: &str, convert_json_tables: bool) -> String {
    if convert_json_tables {
        clean_markdown_tables(&extract_and_convert_json_tables(text))
    } else {
        clean_markdown_tables(text)
    }
}
