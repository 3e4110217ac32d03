//! Translation lookup for tool descriptions and titles.
//!
//! A key resolves to, in order: the `GITHUB_MCP_<KEY>` environment variable,
//! the JSON override file, then the built-in default. Every resolved pair is
//! remembered so the full set can be exported as a starting point for an
//! override file.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Mutex;

use tracing::{debug, info};

use crate::core::config::TranslationsConfig;
use crate::core::{Error, Result};

/// Prefix of environment variables overriding a translation key.
pub const ENV_PREFIX: &str = "GITHUB_MCP_";

/// Resolves `(key, default)` pairs to display text.
#[derive(Debug, Default)]
pub struct Translations {
    overrides: HashMap<String, String>,
    used: Mutex<BTreeMap<String, String>>,
}

impl Translations {
    /// Translations with no override file; environment overrides still apply.
    pub fn new() -> Self {
        Self::default()
    }

    /// Translations backed by an explicit override map.
    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        Self {
            overrides: overrides
                .into_iter()
                .map(|(k, v)| (k.to_uppercase(), v))
                .collect(),
            used: Mutex::default(),
        }
    }

    /// Load the override file named by the configuration, if any.
    pub fn load(config: &TranslationsConfig) -> Result<Self> {
        let Some(path) = &config.path else {
            return Ok(Self::new());
        };

        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("cannot read translations file {}: {}", path.display(), e))
        })?;
        let overrides: HashMap<String, String> = serde_json::from_str(&raw).map_err(|e| {
            Error::config(format!("invalid translations file {}: {}", path.display(), e))
        })?;

        info!(
            "Loaded {} translation override(s) from {}",
            overrides.len(),
            path.display()
        );
        Ok(Self::with_overrides(overrides))
    }

    /// Resolve `key`, falling back to `default`.
    pub fn get(&self, key: &str, default: &str) -> String {
        let key = key.to_uppercase();
        let value = std::env::var(format!("{ENV_PREFIX}{key}"))
            .ok()
            .or_else(|| self.overrides.get(&key).cloned())
            .unwrap_or_else(|| default.to_string());

        debug!(key = %key, "resolved translation");
        self.used
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key, value.clone());
        value
    }

    /// Every key resolved so far with the text it resolved to.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.used
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Write [`Self::snapshot`] to `path` as pretty-printed JSON.
    pub fn export(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.snapshot())?;
        std::fs::write(path, json)?;
        info!("Exported translations to {}", path.display());
        Ok(())
    }
}
