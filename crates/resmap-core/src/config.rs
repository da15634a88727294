//! Configuration loader and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `RESMAP_*`
//! env vars. Declares the corpus layout (ordered dataset variants and the
//! data directory) and the deployment capabilities of the map.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use crate::types::YearRange;

/// One dataset variant as declared in `[[data.variants]]`. Order in the
/// config file is the order the variant selector presents.
#[derive(Debug, Clone, Deserialize)]
pub struct VariantConfig {
    pub name: String,
    pub file: String,
}

/// Deployment capability flags. Some deployments expose a single embedding
/// and no department selector; the same engine serves both shapes.
#[derive(Debug, Clone, Copy)]
pub struct Capabilities {
    pub supports_department_filter: bool,
    pub supports_multi_embedding: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            supports_department_filter: true,
            supports_multi_embedding: true,
        }
    }
}

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new().merge(Toml::file("config.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("RESMAP_"));

        Ok(Self { figment })
    }

    /// Load from a single explicit file (no env overlays). Used by the CLI
    /// `--config` path and by tests.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let figment = Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("RESMAP_"));
        Ok(Self { figment })
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    /// Directory holding the corpus CSV files, `~`/`$VAR` expanded.
    pub fn data_dir(&self) -> PathBuf {
        let dir: String = self.get("data.dir").unwrap_or_else(|_| "data".to_string());
        expand_path(dir)
    }

    /// The ordered variant declarations. At least one is required.
    pub fn variants(&self) -> anyhow::Result<Vec<VariantConfig>> {
        let variants: Vec<VariantConfig> = self.get("data.variants")?;
        if variants.is_empty() {
            anyhow::bail!("config declares no dataset variants under [[data.variants]]");
        }
        Ok(variants)
    }

    /// Variant selected before the user touches anything; defaults to the
    /// first declared variant.
    pub fn default_variant(&self) -> anyhow::Result<String> {
        match self.get::<String>("filters.default_variant") {
            Ok(name) => Ok(name),
            Err(_) => Ok(self.variants()?[0].name.clone()),
        }
    }

    /// Year-slider selection before the user touches anything.
    pub fn default_year_range(&self) -> YearRange {
        let (lo, hi) = self
            .get::<(i32, i32)>("filters.default_year_range")
            .unwrap_or((2009, 2019));
        YearRange::new(lo, hi)
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            supports_department_filter: self
                .get("filters.supports_department")
                .unwrap_or(true),
            supports_multi_embedding: self
                .get("filters.supports_multi_embedding")
                .unwrap_or(true),
        }
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after
/// expansion. If `p` is absolute, it's returned as-is.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() {
        p
    } else {
        base.join(p)
    }
}
