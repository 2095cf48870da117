//! Reading and writing the palette store file.
//!
//! The store is a single JSON file holding an array of root palettes in
//! registry order. Loading rebuilds the tree silently (no audit events);
//! saving writes pretty or compact JSON with a trailing newline.

use std::fs;
use std::path::Path;

use crate::error::{Result, SwatchError};
use crate::events::EventLog;
use crate::registry::PaletteRegistry;

use super::json::SavedPalette;

/// Load a registry from a store file.
///
/// A missing file is a new project and yields an empty registry. Palettes
/// in the rebuilt tree log future mutations to the given handle.
pub fn load_store(path: &Path, log: &EventLog) -> Result<PaletteRegistry> {
    if !path.exists() {
        return Ok(PaletteRegistry::new());
    }

    let content = fs::read_to_string(path).map_err(|e| SwatchError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read store: {}", e),
    })?;

    parse_store(&content, log)
}

/// Parse store JSON into a registry.
pub fn parse_store(content: &str, log: &EventLog) -> Result<PaletteRegistry> {
    let saved: Vec<SavedPalette> =
        serde_json::from_str(content).map_err(|e| SwatchError::Parse {
            message: format!("Invalid store file: {}", e),
            help: Some("Expected a JSON array of palettes".to_string()),
        })?;

    let mut registry = PaletteRegistry::new();
    for palette in saved {
        let palette = palette.into_palette(log)?;
        let name = palette.name().to_string();
        if !registry.add_palette(palette) {
            return Err(SwatchError::Parse {
                message: format!("Store contains two root palettes named '{}'", name),
                help: Some("Root palette names must be unique".to_string()),
            });
        }
    }

    Ok(registry)
}

/// Write a registry to a store file.
///
/// Creates parent directories as needed. The file always ends with a
/// newline, so saving the result of a load reproduces the input byte for
/// byte.
pub fn save_store(path: &Path, registry: &PaletteRegistry, pretty: bool) -> Result<()> {
    let saved: Vec<SavedPalette> = registry
        .palettes()
        .iter()
        .map(SavedPalette::from_palette)
        .collect();

    let mut json = if pretty {
        serde_json::to_string_pretty(&saved)
    } else {
        serde_json::to_string(&saved)
    }
    .map_err(|e| SwatchError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to serialize store: {}", e),
    })?;
    json.push('\n');

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| SwatchError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create directory: {}", e),
            })?;
        }
    }

    fs::write(path, json).map_err(|e| SwatchError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write store: {}", e),
    })
}
