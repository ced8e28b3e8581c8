// src/spreadsheets/csv.rs

use std::collections::{BTreeMap, BTreeSet};
use std::mem::take;

/// One data row keyed by (trimmed) header name.
pub type CsvRecord = BTreeMap<String, String>;

/// Parses CSV text with a header row into records.
///
/// The first non-blank row is the header; blank rows are skipped anywhere.
/// A cell wrapped in double quotes may contain commas and line breaks, and
/// `""` inside it stands for one literal quote. Rows shorter than the header
/// are padded with empty strings, longer rows are cut to the header width.
///
/// This never fails: text without data rows yields an empty vector.
pub fn parse_csv(text: &str) -> Vec<CsvRecord> {
    let mut rows = split_rows(text).into_iter();

    let headers = match rows.next() {
        Some(row) => row,
        None => return Vec::new(),
    };

    rows.map(|row| {
        let mut cells = row.into_iter();
        headers
            .iter()
            .map(|h| (h.clone(), cells.next().unwrap_or_default()))
            .collect()
    })
    .collect()
}

/// Writes records back out as CSV, header first.
///
/// The header is the sorted union of all record keys, so records with
/// missing keys get empty cells.
pub fn records_to_csv(records: &[CsvRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let headers: BTreeSet<&str> = records
        .iter()
        .flat_map(|r| r.keys().map(String::as_str))
        .collect();

    let mut out = String::new();
    push_row(&mut out, headers.iter().copied());

    for record in records {
        push_row(
            &mut out,
            headers
                .iter()
                .map(|h| record.get(*h).map(String::as_str).unwrap_or("")),
        );
    }

    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>) {
    let row: Vec<String> = cells.map(escape_cell).collect();
    out.push_str(&row.join(","));
    out.push('\n');
}

fn escape_cell(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Splits the whole text into rows of trimmed cells. Line breaks end a row
/// only outside quotes; an unterminated quote runs to the end of the text.
fn split_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    cell.push('"');
                } else {
                    in_quotes = false;
                }
            }
            // Quotes only open a field at its start (after optional padding).
            '"' if cell.trim().is_empty() => {
                cell.clear();
                in_quotes = true;
            }
            ',' if !in_quotes => row.push(take(&mut cell).trim().to_string()),
            '\n' | '\r' if !in_quotes => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(take(&mut cell).trim().to_string());
                keep_row(&mut rows, take(&mut row));
            }
            _ => cell.push(c),
        }
    }

    row.push(cell.trim().to_string());
    keep_row(&mut rows, row);
    rows
}

fn keep_row(rows: &mut Vec<Vec<String>>, row: Vec<String>) {
    let blank = row.len() == 1 && row[0].is_empty();
    if !blank {
        rows.push(row);
    }
}
