// src/csv.rs
use std::mem::take;

pub type Cell = String;
pub type Row = Vec<Cell>;
pub type Table = Vec<Row>;

const SEP: char = ',';
const QUOTE: char = '"';
const RECORD_SEP: char = '\n';

/* ---------------- Parsing ---------------- */

/// Parse a published-sheet CSV export into rows of cells.
///
/// Never fails. Quoted regions may hold separators and line feeds; `""`
/// always collapses to a single literal quote. An unterminated quote
/// swallows the rest of the input into the last cell.
///
/// Carriage returns are kept as cell content. Input ending in `\n` yields
/// a trailing `[""]` row, and `""` parses to `[[""]]`.
pub fn parse(text: &str) -> Table {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut cell = s!();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            QUOTE if chars.peek() == Some(&QUOTE) => {
                chars.next(); // escaped quote
                cell.push(QUOTE);
            }
            QUOTE => in_quotes = !in_quotes,
            SEP if !in_quotes => row.push(take(&mut cell)),
            RECORD_SEP if !in_quotes => {
                row.push(take(&mut cell));
                rows.push(take(&mut row));
            }
            _ => cell.push(ch),
        }
    }

    // Final record, terminated or not.
    row.push(cell);
    rows.push(row);

    rows
}
