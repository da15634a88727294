//! resmap-session
//!
//! Composition layer: one `MapSession` per logical session/tab, holding a
//! shared read-only `DatasetStore` and the deployment capabilities. Filter
//! state stays with the UI collaborator; each event is one synchronous,
//! atomic recomputation through filter → colorize → build.

use std::sync::Arc;

use tracing::debug;

use resmap_core::config::{Capabilities, Config};
use resmap_core::error::Result;
use resmap_core::traits::{ClickEventHandler, FilterEventHandler};
use resmap_core::types::{Document, FilterState};
use resmap_data::DatasetStore;
use resmap_scene::{build, colors_for, describe, SceneDescriptor, SelectionReadout};

pub struct MapSession {
    store: Arc<DatasetStore>,
    capabilities: Capabilities,
}

impl MapSession {
    /// `store` is shared: concurrent sessions each get their own
    /// `MapSession` over the same corpus and never share filter state.
    pub fn new(store: Arc<DatasetStore>, capabilities: Capabilities) -> Self {
        Self { store, capabilities }
    }

    /// Convenience constructor for single-session deployments: loads the
    /// corpus declared by the config and reads the capability flags.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let store = Arc::new(DatasetStore::load(config)?);
        Ok(Self::new(store, config.capabilities()))
    }

    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Recompute the full scene for a filter state. The capability flags
    /// are applied first: an unsupported department selection is treated
    /// as unset, and a single-embedding deployment pins the variant to the
    /// first configured one.
    pub fn render(&self, state: &FilterState) -> Result<SceneDescriptor> {
        let state = self.effective_state(state);
        let outcome = resmap_filter::apply(&self.store, &state)?;
        let variant = self.store.variant(&state.variant)?;
        let colors = colors_for(variant);

        debug!(
            variant = %state.variant,
            base = outcome.base.len(),
            highlighted = outcome.highlighted.as_ref().map(Vec::len),
            "recomputed scene"
        );
        build(&outcome.base, outcome.highlighted.as_deref(), &colors)
    }

    fn effective_state(&self, state: &FilterState) -> FilterState {
        let mut state = state.clone();
        if !self.capabilities.supports_department_filter {
            state.department = None;
        }
        if !self.capabilities.supports_multi_embedding {
            state.variant = self.store.variant_names()[0].clone();
        }
        state
    }
}

impl FilterEventHandler for MapSession {
    type Scene = SceneDescriptor;

    fn on_filter_changed(&self, state: &FilterState) -> Result<SceneDescriptor> {
        self.render(state)
    }
}

impl ClickEventHandler for MapSession {
    type Readout = SelectionReadout;

    fn on_point_clicked(&self, clicked: Option<&Document>) -> SelectionReadout {
        describe(clicked)
    }
}
