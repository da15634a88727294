//! Click-payload formatting.
//!
//! Pure function of the clicked document: no filter state is touched and
//! nothing is cached. Keys are sorted so repeated clicks on the same point
//! render byte-identical readouts.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use resmap_core::types::Document;

pub const NO_SELECTION_PLACEHOLDER: &str =
    "Click on a document in the map to view its information";

/// Structured metadata for the clicked document, or the fixed placeholder
/// when nothing has been clicked yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SelectionReadout {
    NoSelection,
    Selected(BTreeMap<String, Value>),
}

impl SelectionReadout {
    /// Human-readable text: the placeholder, or the document's fields as
    /// pretty-printed JSON with sorted keys.
    pub fn to_text(&self) -> String {
        match self {
            Self::NoSelection => NO_SELECTION_PLACEHOLDER.to_string(),
            Self::Selected(fields) => serde_json::to_string_pretty(fields)
                .unwrap_or_else(|_| format!("{fields:?}")),
        }
    }
}

/// Format a point-click event. `None` means no click has happened yet.
pub fn describe(clicked: Option<&Document>) -> SelectionReadout {
    match clicked {
        None => SelectionReadout::NoSelection,
        Some(doc) => SelectionReadout::Selected(document_fields(doc)),
    }
}

fn document_fields(doc: &Document) -> BTreeMap<String, Value> {
    match serde_json::to_value(doc) {
        Ok(Value::Object(map)) => map.into_iter().collect(),
        // Document serializes to an object; any other shape would be a
        // type-definition bug.
        _ => BTreeMap::new(),
    }
}
