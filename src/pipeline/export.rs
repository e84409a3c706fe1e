//! CSV export of the filtered/sorted sequence.
//!
//! Export is a data-extraction concern, deliberately separate from
//! pagination: it always serializes the *full* filtered/sorted sequence,
//! never just the visible page. Column labels come from a fixed schema, so
//! an empty sequence still yields a valid header-only file.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// One exported column: a header label and a value extractor.
///
/// Extractors are plain functions so a column spec can live in a `const`
/// next to the view that owns it.
pub struct Column<R> {
    /// Header label for this column.
    pub label: &'static str,
    /// Renders the cell value for one record.
    pub value: fn(&R) -> String,
}

/// Quote one CSV field: always wrapped in double quotes, embedded quotes
/// doubled, so the output stays parseable by any standard CSV reader even
/// when values contain commas, quotes, or newlines.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Serialize the full sequence to CSV text.
///
/// One header row from the column spec, then one row per record in the
/// sequence's current order. Rows end with `\n`.
pub fn to_csv<R>(records: &[R], columns: &[Column<R>]) -> String {
    let mut out = String::new();
    let header: Vec<String> = columns.iter().map(|c| quote(c.label)).collect();
    out.push_str(&header.join(","));
    out.push('\n');
    for record in records {
        let row: Vec<String> = columns.iter().map(|c| quote(&(c.value)(record))).collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// Export filename: `<view-name>-<ISO-date>.csv`.
pub fn export_filename(view_slug: &str, date: NaiveDate) -> String {
    format!("{view_slug}-{}.csv", date.format("%Y-%m-%d"))
}

/// Write a CSV export for a view into `dir`, returning the written path.
///
/// The one synchronous filesystem touch in the pipeline, triggered directly
/// by the user's export action.
pub fn write_export<R>(
    dir: &Path,
    view_slug: &str,
    date: NaiveDate,
    records: &[R],
    columns: &[Column<R>],
) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_filename(view_slug, date));
    std::fs::write(&path, to_csv(records, columns))?;
    Ok(path)
}
