//! The CSV import command: streams a file row by row and creates one
//! document per data row.
//!
//! The first row is the header. An optional allow-list restricts which
//! columns become document fields; matching against the header is
//! case-insensitive. Header names map to field names by lower-casing and
//! replacing spaces with hyphens.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use kibana_client::{ClusterEndpoint, StoreClient};

/// Counters printed in the final summary line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub lines: u64,
    pub created: u64,
    pub failures: u64,
}

/// Stream `file` into the store, one create request per data row,
/// sequentially. Per-row failures go to stderr and the run continues; the
/// summary line goes to stdout at the end.
pub async fn run(
    endpoint: ClusterEndpoint,
    doc_type: &str,
    columns: Option<Vec<String>>,
    file: &Path,
) -> Result<ImportSummary> {
    let client = StoreClient::new(endpoint);

    let mut reader = csv::Reader::from_path(file)
        .with_context(|| format!("cannot open {}", file.display()))?;
    let headers = reader
        .headers()
        .context("cannot read CSV header row")?
        .clone();
    let column_map: Vec<Option<String>> = headers
        .iter()
        .map(|col| include_column(col, columns.as_deref()).then(|| field_name(col)))
        .collect();

    let mut summary = ImportSummary::default();
    for record in reader.records() {
        let record = record.context("cannot read CSV row")?;
        let doc = row_to_document(&column_map, record.iter());

        match client.create_document(doc_type, &doc).await {
            Ok(()) => summary.created += 1,
            Err(e) => {
                summary.failures += 1;
                eprintln!("{e}");
            }
        }
        summary.lines += 1;
    }

    println!(
        "{} lines read. {} documents created.  {} failures",
        summary.lines, summary.created, summary.failures
    );
    Ok(summary)
}

/// True if this CSV column should be imported.
fn include_column(col: &str, allowed: Option<&[String]>) -> bool {
    allowed.is_none_or(|cols| cols.iter().any(|c| c.eq_ignore_ascii_case(col)))
}

/// Map a CSV column name to a document field name.
fn field_name(col: &str) -> String {
    col.to_lowercase().replace(' ', "-")
}

/// Build one document from a row, keeping only mapped columns.
fn row_to_document<'a>(
    column_map: &[Option<String>],
    values: impl Iterator<Item = &'a str>,
) -> Value {
    let mut doc = serde_json::Map::new();
    for (i, value) in values.enumerate() {
        if let Some(Some(field)) = column_map.get(i) {
            doc.insert(field.clone(), Value::String(value.to_string()));
        }
    }
    Value::Object(doc)
}
