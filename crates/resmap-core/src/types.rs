//! Domain types shared by the dataset store, filter engine, and scene builder.

use serde::{Deserialize, Serialize};

pub type Label = String;

/// One corpus record: a research publication or project.
///
/// - `x`/`y`: precomputed 2-D embedding position (t-SNE or similar)
/// - `doc_type`: publication/project kind ("type" column)
/// - `doi`: absent for records without a registered DOI
/// - `main_label`: primary topic assigned by the topic model
/// - `main_keys`: keyword summary for the primary topic
/// - `researcher`: affiliated researcher ("Name" column)
/// - `department`: the researcher's primary academic department
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub x: f64,
    pub y: f64,
    pub title: String,
    pub authors: String,
    pub year: i32,
    pub doc_type: String,
    pub doi: Option<String>,
    pub main_label: Label,
    pub main_keys: String,
    pub researcher: String,
    pub department: String,
}

/// A named, immutable copy of the corpus under one embedding/granularity
/// configuration (e.g. "coarse (9 topics)"). Loaded once at startup and
/// never mutated.
#[derive(Debug, Clone)]
pub struct DatasetVariant {
    pub name: String,
    pub documents: Vec<Document>,
}

impl DatasetVariant {
    /// Sorted distinct primary-topic labels present in this variant.
    pub fn distinct_labels(&self) -> Vec<Label> {
        let mut labels: Vec<Label> =
            self.documents.iter().map(|d| d.main_label.clone()).collect();
        labels.sort();
        labels.dedup();
        labels
    }

    /// Min and max publication year, or `None` for an empty variant.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let years = self.documents.iter().map(|d| d.year);
        Some((years.clone().min()?, years.max()?))
    }
}

/// The year slider's endpoint selection. The filter keeps strictly interior
/// years only (`lo < year < hi`), so documents dated exactly at either
/// endpoint are excluded. An inverted range is unsatisfiable and yields an
/// empty result rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub lo: i32,
    pub hi: i32,
}

impl YearRange {
    pub fn new(lo: i32, hi: i32) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, year: i32) -> bool {
        self.lo < year && year < self.hi
    }
}

/// The current combination of selector values. Owned by the UI collaborator;
/// every mutation triggers one full recomputation.
///
/// `researcher` and `department` are mutually exclusive in effect: when both
/// are set, the researcher selection wins and the department selection is
/// ignored for that render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterState {
    pub researcher: Option<String>,
    pub department: Option<String>,
    pub year_range: YearRange,
    pub variant: String,
}

impl FilterState {
    /// A state with no identity filter over the given variant and range.
    pub fn unfiltered(variant: impl Into<String>, year_range: YearRange) -> Self {
        Self {
            researcher: None,
            department: None,
            year_range,
            variant: variant.into(),
        }
    }
}
