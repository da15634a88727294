//! resmap-filter
//!
//! The filter engine: resolves the active dataset variant, applies the year
//! predicate, then at most one identity predicate. Researcher beats
//! department when both are set; the first-checked selection wins, matching
//! the dashboard this corpus shipped with.
//!
//! The year predicate is strict at both ends (`lo < year < hi`), so
//! documents dated exactly at a slider endpoint are excluded. An inverted
//! range is simply unsatisfiable under that predicate and falls through to
//! an empty result; there is no special case and no panic.

use resmap_core::error::Result;
use resmap_core::types::{Document, FilterState};
use resmap_data::DatasetStore;

/// Result of one filter application. `highlighted` is `Some` exactly when
/// an identity predicate was in effect, and is always a subset of `base`.
#[derive(Debug)]
pub struct FilterOutcome<'a> {
    pub base: Vec<&'a Document>,
    pub highlighted: Option<Vec<&'a Document>>,
}

impl FilterOutcome<'_> {
    /// True when an identity filter was applied, even if it matched nothing.
    pub fn highlight_active(&self) -> bool {
        self.highlighted.is_some()
    }
}

/// Apply the current filter state against the store.
///
/// Fails only on an unknown variant name; every other combination of
/// selections is defined, possibly as an empty outcome.
pub fn apply<'a>(store: &'a DatasetStore, state: &FilterState) -> Result<FilterOutcome<'a>> {
    let variant = store.variant(&state.variant)?;

    let base: Vec<&Document> = variant
        .documents
        .iter()
        .filter(|d| state.year_range.contains(d.year))
        .collect();

    let highlighted = if let Some(researcher) = &state.researcher {
        Some(matching(&base, |d| d.researcher == *researcher))
    } else if let Some(department) = &state.department {
        Some(matching(&base, |d| d.department == *department))
    } else {
        None
    };

    Ok(FilterOutcome { base, highlighted })
}

fn matching<'a, P>(base: &[&'a Document], predicate: P) -> Vec<&'a Document>
where
    P: Fn(&Document) -> bool,
{
    base.iter().copied().filter(|d| predicate(d)).collect()
}
