//! CSV ingestion for one dataset variant.
//!
//! The corpus files are pandas CSV exports with a leading unnamed index
//! column, which serde ignores. A row missing any required field (`x`, `y`,
//! `year`, `main_label`) fails the whole load; no partial corpus is ever
//! produced.

use serde::Deserialize;
use std::path::Path;
use tracing::info;

use resmap_core::error::{Error, Result};
use resmap_core::types::{DatasetVariant, Document};

/// Raw CSV row. Every field is optional at parse time so that a missing
/// value surfaces as a named validation error instead of a serde one.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(default)]
    x: Option<f64>,
    #[serde(default)]
    y: Option<f64>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    authors: Option<String>,
    #[serde(default)]
    year: Option<i32>,
    #[serde(rename = "type", default)]
    doc_type: Option<String>,
    #[serde(default)]
    doi: Option<String>,
    #[serde(default)]
    main_label: Option<String>,
    #[serde(default)]
    main_keys: Option<String>,
    #[serde(rename = "Name", default)]
    researcher: Option<String>,
    #[serde(rename = "PI_primary_dept", default)]
    department: Option<String>,
}

fn malformed(file: &Path, row: usize, reason: impl Into<String>) -> Error {
    Error::MalformedDataset {
        file: file.display().to_string(),
        row,
        reason: reason.into(),
    }
}

fn required<T>(value: Option<T>, name: &str, file: &Path, row: usize) -> Result<T> {
    value.ok_or_else(|| malformed(file, row, format!("missing required field '{name}'")))
}

impl RawRow {
    fn into_document(self, file: &Path, row: usize) -> Result<Document> {
        Ok(Document {
            x: required(self.x, "x", file, row)?,
            y: required(self.y, "y", file, row)?,
            year: required(self.year, "year", file, row)?,
            main_label: required(self.main_label, "main_label", file, row)?,
            title: self.title.unwrap_or_default(),
            authors: self.authors.unwrap_or_default(),
            doc_type: self.doc_type.unwrap_or_default(),
            doi: self.doi,
            main_keys: self.main_keys.unwrap_or_default(),
            researcher: self.researcher.unwrap_or_default(),
            department: self.department.unwrap_or_default(),
        })
    }
}

/// Load one variant from a CSV file. Row numbers in errors count data rows
/// from 1 (the header is row 0).
pub fn load_variant(name: &str, path: &Path) -> Result<DatasetVariant> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| malformed(path, 0, format!("cannot open: {e}")))?;

    let mut documents = Vec::new();
    for (index, record) in reader.deserialize::<RawRow>().enumerate() {
        let row = index + 1;
        let raw = record.map_err(|e| malformed(path, row, e.to_string()))?;
        documents.push(raw.into_document(path, row)?);
    }

    info!(
        variant = name,
        rows = documents.len(),
        file = %path.display(),
        "loaded dataset variant"
    );
    Ok(DatasetVariant { name: name.to_string(), documents })
}
