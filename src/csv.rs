// src/csv.rs
use std::collections::HashMap;
use std::sync::Arc;

use csv::{ReaderBuilder, StringRecord};

use crate::error::{Error, Result};

/// Column name → field position, built once per file and shared by its rows.
/// When a header name repeats, the rightmost column wins.
pub type HeaderIndex = Arc<HashMap<String, usize>>;

fn index_headers<'a>(names: impl IntoIterator<Item = &'a str>) -> HeaderIndex {
    let mut index = HashMap::new();
    for (pos, name) in names.into_iter().enumerate() {
        index.insert(s!(name), pos);
    }
    Arc::new(index)
}

/// One data line of a downloaded CSV, keyed by the header row.
///
/// Short lines lack the trailing keys; surplus fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRow {
    headers: HeaderIndex,
    record: StringRecord,
}

impl RawRow {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.headers.get(column).and_then(|&pos| self.record.get(pos))
    }

    /// Value of `column`, or `default` when the column is absent.
    /// A present-but-empty value is returned as "".
    pub fn get_or<'a>(&'a self, column: &str, default: &'a str) -> &'a str {
        self.get(column).unwrap_or(default)
    }

    /// Number of columns this row actually carries a value for.
    pub fn len(&self) -> usize {
        self.headers.values().filter(|&&pos| pos < self.record.len()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let (names, values): (Vec<K>, Vec<V>) = iter.into_iter().unzip();
        Self {
            headers: index_headers(names.iter().map(AsRef::as_ref)),
            record: values.iter().map(AsRef::as_ref).collect(),
        }
    }
}

/* ---------------- Parsing ---------------- */

/// Parse header-delimited, comma-separated text into rows.
/// `origin` only labels errors (usually the URL the text came from).
pub fn parse_rows(text: &str, origin: &str) -> Result<Vec<RawRow>> {
    parse_rows_where(text, origin, |_| true)
}

/// Like [`parse_rows`], but only keeps rows `keep` accepts.
/// Rejected lines are dropped while streaming and never held in memory.
pub fn parse_rows_where(
    text: &str,
    origin: &str,
    mut keep: impl FnMut(&RawRow) -> bool,
) -> Result<Vec<RawRow>> {
    let csv_err = |source: csv::Error| Error::Csv { origin: s!(origin), source };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = index_headers(reader.headers().map_err(csv_err)?.iter());

    let mut rows: Vec<RawRow> = Vec::new();
    for record in reader.records() {
        let row = RawRow { headers: Arc::clone(&headers), record: record.map_err(csv_err)? };
        if keep(&row) {
            rows.push(row);
        }
    }
    Ok(rows)
}
