// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn char(&self) -> char {
        match self { Delim::Csv => ',', Delim::Tsv => '\t' }
    }
    pub fn ext(&self) -> &'static str {
        match self { Delim::Csv => "csv", Delim::Tsv => "tsv" }
    }
}

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant). std-only.
///
/// Never fails: unterminated quotes just run to end of input and the
/// pending cell/row is flushed. Row order matches input order.
pub fn parse_rows(text: &str, delim: Delim) -> Vec<Vec<String>> {
    let sep = delim.char();
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                // move the field without cloning
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !row.is_empty() && !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// A parsed table: first input row becomes the header, lookups are
/// header-keyed and case-insensitive. Data rows are padded/truncated to
/// header width so positional access never goes out of bounds.
#[derive(Clone, Debug, Default)]
pub struct Table {
    /// Header cells, trimmed and lower-cased (lookup keys).
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn from_text(text: &str, delim: Delim) -> Self {
        let mut parsed = parse_rows(text, delim);
        if parsed.is_empty() {
            return Self::default();
        }

        let headers: Vec<String> = parsed
            .remove(0)
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();
        let width = headers.len();

        let mut rows = Vec::with_capacity(parsed.len());
        for mut row in parsed {
            // Skip rows that are blank once trimmed.
            if row.iter().all(|c| c.trim().is_empty()) { continue; }
            // Pad missing trailing cells; drop extras beyond the header.
            row.resize(width, s!());
            rows.push(row);
        }

        Self { headers, rows }
    }

    /// Column index for a header name, case-insensitive.
    pub fn col(&self, name: &str) -> Option<usize> {
        let key = name.trim().to_lowercase();
        self.headers.iter().position(|h| *h == key)
    }

    /// First column (header declaration order) whose name contains any of
    /// the given substrings. Used for heuristic image-column detection;
    /// the first-match-wins tie-break is deliberate.
    pub fn col_containing(&self, needles: &[&str]) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| needles.iter().any(|n| h.contains(n)))
    }

    /// Field of `row` under header `name`; absent header → "".
    pub fn field<'a>(&self, row: &'a [String], name: &str) -> &'a str {
        self.col(name)
            .and_then(|ix| row.get(ix))
            .map(|c| c.as_str())
            .unwrap_or("")
    }

    pub fn row_count(&self) -> usize { self.rows.len() }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], delim: Delim) -> io::Result<()> {
    let sep = delim.char();
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Stringify rows as-is, optional header line first.
pub fn rows_to_string(rows: &[Vec<String>], headers: &Option<Vec<String>>, delim: Delim) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, delim);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, delim);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
