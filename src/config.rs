//! Project manifest (swatch.yaml) parsing.
//!
//! The manifest defines project configuration: where the palette store
//! lives and how it is written. Every field is optional, and a missing
//! manifest is the same as an empty one.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SwatchError};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "swatch.yaml";

/// Project manifest loaded from swatch.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Path to the palette store file.
    pub store: PathBuf,

    /// Pretty-print the store file on save.
    pub pretty: bool,
}

fn default_store() -> PathBuf {
    PathBuf::from("palettes.json")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            store: default_store(),
            pretty: true,
        }
    }
}

impl Manifest {
    /// Load manifest from a swatch.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SwatchError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    ///
    /// An empty document is a valid manifest with every field defaulted.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| SwatchError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check swatch.yaml syntax".to_string()),
        })
    }

    /// Load the manifest from a directory, or defaults when none exists.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILENAME);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// The store path, honouring an explicit override.
    pub fn effective_store(&self, override_path: Option<&Path>) -> PathBuf {
        match override_path {
            Some(path) => path.to_path_buf(),
            None => self.store.clone(),
        }
    }
}
