use crate::error::Result;
use crate::types::{Document, FilterState};

/// Handles a filter-state change by recomputing the full renderable scene.
/// One call per mutation; no incremental patching.
pub trait FilterEventHandler: Send + Sync {
    type Scene;
    fn on_filter_changed(&self, state: &FilterState) -> Result<Self::Scene>;
}

/// Handles a point-click by formatting the clicked document's metadata.
/// `None` means nothing has been clicked yet.
pub trait ClickEventHandler: Send + Sync {
    type Readout;
    fn on_point_clicked(&self, clicked: Option<&Document>) -> Self::Readout;
}
