//! resmap-data
//!
//! Dataset Store: one-time CSV ingestion of the corpus variants with
//! fail-fast validation, and a read-only, insertion-ordered variant
//! registry. See `loader` and `store`.

pub mod loader;
pub mod store;

pub use loader::load_variant;
pub use store::DatasetStore;
