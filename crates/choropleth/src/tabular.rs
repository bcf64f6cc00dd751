//! Comma-separated tabular input: one row per region.
//!
//! Supports a header row, double-quoted fields with `""` escapes, CRLF line
//! endings, and blank lines. Cells are kept as raw strings; numeric parsing
//! happens when a value is read (see [`crate::region::parse_float`]).

use std::collections::BTreeMap;

use bevy::log::warn;

use crate::error::LoadError;
use crate::region::Record;

/// Parse `text` into records keyed by the `key_field` column.
pub fn parse_records(text: &str, key_field: &str) -> Result<Vec<Record>, LoadError> {
    let mut rows = split_rows(text).into_iter();
    let Some(header) = rows.next() else {
        return Err(LoadError::MissingColumn(key_field.to_string()));
    };
    let header: Vec<String> = header.into_iter().map(|h| h.trim().to_string()).collect();
    let Some(key_idx) = header.iter().position(|h| h == key_field) else {
        return Err(LoadError::MissingColumn(key_field.to_string()));
    };

    let mut records = Vec::new();
    for (line, row) in rows.enumerate() {
        let code = row.get(key_idx).map(|c| c.trim()).unwrap_or_default();
        if code.is_empty() {
            warn!("Skipping data row {}: empty '{key_field}'", line + 2);
            continue;
        }
        let fields: BTreeMap<String, String> = header
            .iter()
            .zip(row.iter())
            .map(|(h, v)| (h.clone(), v.clone()))
            .collect();
        records.push(Record::new(code, fields));
    }
    Ok(records)
}

/// Split into rows of fields. Blank lines are dropped.
fn split_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    field.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' => in_quotes = true,
            ',' => row.push(std::mem::take(&mut field)),
            '\r' => {}
            '\n' => {
                row.push(std::mem::take(&mut field));
                push_row(&mut rows, std::mem::take(&mut row));
            }
            _ => field.push(c),
        }
    }
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        push_row(&mut rows, row);
    }
    rows
}

fn push_row(rows: &mut Vec<Vec<String>>, row: Vec<String>) {
    let blank = row.iter().all(|f| f.trim().is_empty());
    if !blank {
        rows.push(row);
    }
}
