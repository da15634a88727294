//! Read-only registry of loaded dataset variants.
//!
//! Populated once at startup, then shared immutably; there is no writer
//! after load, so sessions can borrow it freely.

use std::collections::HashMap;
use std::path::Path;

use resmap_core::config::{resolve_with_base, Config};
use resmap_core::error::{Error, Result};
use resmap_core::types::DatasetVariant;

use crate::loader::load_variant;

pub struct DatasetStore {
    /// Variant names in configuration order (drives the selector).
    names: Vec<String>,
    variants: HashMap<String, DatasetVariant>,
}

impl DatasetStore {
    /// Load every configured variant. Fails on the first malformed file;
    /// no partially loaded store is ever returned.
    pub fn load(config: &Config) -> anyhow::Result<Self> {
        let data_dir = config.data_dir();
        let mut loaded = Vec::new();
        for vc in config.variants()? {
            let path = resolve_with_base(&data_dir, &vc.file);
            loaded.push(load_variant(&vc.name, &path)?);
        }
        Ok(Self::from_variants(loaded)?)
    }

    /// Load from explicit (name, path) pairs, preserving their order.
    pub fn from_sources<'a, I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a Path)>,
    {
        let mut loaded = Vec::new();
        for (name, path) in sources {
            loaded.push(load_variant(name, path)?);
        }
        Self::from_variants(loaded)
    }

    /// Build a store from already-materialized variants (used by tests and
    /// by callers with in-memory corpora).
    pub fn from_variants(variants: Vec<DatasetVariant>) -> Result<Self> {
        if variants.is_empty() {
            return Err(Error::InvalidConfig("no dataset variants loaded".to_string()));
        }
        let mut names = Vec::with_capacity(variants.len());
        let mut by_name = HashMap::with_capacity(variants.len());
        for variant in variants {
            if by_name.contains_key(&variant.name) {
                return Err(Error::InvalidConfig(format!(
                    "duplicate dataset variant '{}'",
                    variant.name
                )));
            }
            names.push(variant.name.clone());
            by_name.insert(variant.name.clone(), variant);
        }
        Ok(Self { names, variants: by_name })
    }

    /// Resolve a variant by name. Never substitutes a fallback; recovery
    /// is the caller's decision.
    pub fn variant(&self, name: &str) -> Result<&DatasetVariant> {
        self.variants
            .get(name)
            .ok_or_else(|| Error::UnknownVariant(name.to_string()))
    }

    /// Variant names in configuration order, not sorted.
    pub fn variant_names(&self) -> &[String] {
        &self.names
    }

    /// The first configured variant, the selector's initial value.
    pub fn default_variant(&self) -> &DatasetVariant {
        &self.variants[&self.names[0]]
    }

    /// Sorted distinct researcher names, for the researcher dropdown.
    /// Drawn from the first variant; every variant carries the same corpus.
    pub fn researcher_names(&self) -> Vec<String> {
        self.distinct(|d| &d.researcher)
    }

    /// Sorted distinct department names, for the department dropdown.
    pub fn department_names(&self) -> Vec<String> {
        self.distinct(|d| &d.department)
    }

    /// Corpus year bounds, for the year slider.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        self.default_variant().year_bounds()
    }

    fn distinct<F>(&self, field: F) -> Vec<String>
    where
        F: Fn(&resmap_core::types::Document) -> &String,
    {
        let mut values: Vec<String> = self
            .default_variant()
            .documents
            .iter()
            .map(|d| field(d).clone())
            .filter(|v| !v.is_empty())
            .collect();
        values.sort();
        values.dedup();
        values
    }
}
