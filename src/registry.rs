//! Root palette registry.
//!
//! The registry holds the top-level palettes in insertion order; it is the
//! in-memory form of the store file. Root names must be unique, which is
//! what makes path addressing (`"Sunset Colours/Warm Colours"`) useful.
//! Nested palettes may repeat names freely; lookups take the first match.
//!
//! Registry operations never touch the event log; only palette mutations
//! are audited.
//!
//! # Example
//!
//! ```ignore
//! let mut registry = PaletteRegistry::new();
//! registry.add_palette(ColourPalette::new("Sunset Colours"));
//! let sunset = registry.find_path("Sunset Colours");
//! ```

use crate::types::ColourPalette;

/// Ordered collection of root palettes with unique names.
#[derive(Debug, Default)]
pub struct PaletteRegistry {
    palettes: Vec<ColourPalette>,
}

impl PaletteRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a root palette.
    ///
    /// Refuses (returns `false`) when a root with the same name already
    /// exists. Nested occurrences of the name elsewhere are not checked.
    pub fn add_palette(&mut self, palette: ColourPalette) -> bool {
        if self.contains(palette.name()) {
            return false;
        }
        self.palettes.push(palette);
        true
    }

    /// Remove and return the root palette with the given name.
    pub fn remove_palette(&mut self, name: &str) -> Option<ColourPalette> {
        let index = self.palettes.iter().position(|p| p.name() == name)?;
        Some(self.palettes.remove(index))
    }

    /// Check whether a root palette with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.palettes.iter().any(|p| p.name() == name)
    }

    /// Get a root palette by name.
    pub fn get(&self, name: &str) -> Option<&ColourPalette> {
        self.palettes.iter().find(|p| p.name() == name)
    }

    /// Get mutable access to a root palette by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut ColourPalette> {
        self.palettes.iter_mut().find(|p| p.name() == name)
    }

    /// Resolve a `/`-separated path of palette names.
    ///
    /// The first segment names a root, each further segment the first
    /// matching sub-palette. Palettes whose names contain `/` cannot be
    /// addressed this way.
    pub fn find_path(&self, path: &str) -> Option<&ColourPalette> {
        let mut segments = path.split('/');
        let mut current = self.get(segments.next()?)?;
        for segment in segments {
            current = current.sub_colour_palette(segment)?;
        }
        Some(current)
    }

    /// Resolve a `/`-separated path for mutation.
    pub fn find_path_mut(&mut self, path: &str) -> Option<&mut ColourPalette> {
        let mut segments = path.split('/');
        let mut current = self.get_mut(segments.next()?)?;
        for segment in segments {
            current = current.sub_colour_palette_mut(segment)?;
        }
        Some(current)
    }

    /// Root palettes in insertion order.
    pub fn palettes(&self) -> &[ColourPalette] {
        &self.palettes
    }

    /// Names of all root palettes, in insertion order.
    pub fn palette_names(&self) -> impl Iterator<Item = &str> {
        self.palettes.iter().map(|p| p.name())
    }

    /// Number of root palettes.
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    /// Check if the registry holds no palettes.
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}
