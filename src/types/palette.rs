//! Colour palettes: named, nestable collections of colours.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{Result, SwatchError};
use crate::events::EventLog;

use super::Colour;

/// Process-unique palette identity.
///
/// Identity is assigned at construction and survives moves and clones:
/// a cloned palette keeps the id of its source and counts as the same
/// palette for membership checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaletteId(u64);

impl PaletteId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A named, ordered collection of colours and nested sub-palettes.
///
/// A palette owns its sub-palettes exclusively, so palette structure is
/// always a tree: nesting a palette consumes it, and no palette can end up
/// inside itself. Duplicate detection is value-based for colours and
/// identity-based (via [`PaletteId`]) for sub-palettes, which is why two
/// structurally equal palettes are still distinct members.
///
/// Every mutation that changes state records exactly one event in the
/// palette's [`EventLog`]; refused mutations record nothing. Equality
/// compares identity, not contents.
#[derive(Debug, Clone)]
pub struct ColourPalette {
    id: PaletteId,
    name: String,
    colours: Vec<Colour>,
    sub_palettes: Vec<ColourPalette>,
    log: EventLog,
}

impl ColourPalette {
    /// Create an empty palette logging to the process-wide event log.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_log(name, EventLog::shared())
    }

    /// Create an empty palette logging to the given log.
    ///
    /// Construction itself is never logged.
    pub fn with_log(name: impl Into<String>, log: EventLog) -> Self {
        Self {
            id: PaletteId::next(),
            name: name.into(),
            colours: Vec::new(),
            sub_palettes: Vec::new(),
            log,
        }
    }

    /// Assemble a palette directly with a fresh identity.
    ///
    /// Persistence uses this when rebuilding a tree from disk: nothing is
    /// logged, so loading a store leaves the event log untouched. The
    /// caller is responsible for the duplicate-colour invariant.
    pub(crate) fn assemble(
        name: String,
        colours: Vec<Colour>,
        sub_palettes: Vec<ColourPalette>,
        log: EventLog,
    ) -> Self {
        Self {
            id: PaletteId::next(),
            name,
            colours,
            sub_palettes,
            log,
        }
    }

    /// The palette's identity.
    pub fn id(&self) -> PaletteId {
        self.id
    }

    /// The palette's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the palette. Renames are not logged.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Add a colour unless a value-equal one is already present.
    ///
    /// Returns whether the palette changed.
    pub fn add_colour(&mut self, colour: Colour) -> bool {
        if self.colours.contains(&colour) {
            return false;
        }
        self.log.log_event(format!(
            "Added colour {} to palette: {}",
            colour.name(),
            self.name
        ));
        self.colours.push(colour);
        true
    }

    /// Remove the first colour whose name matches exactly.
    ///
    /// Returns whether the palette changed.
    pub fn delete_colour(&mut self, name: &str) -> bool {
        let Some(index) = self.colours.iter().position(|c| c.name() == name) else {
            return false;
        };
        self.colours.remove(index);
        self.log
            .log_event(format!("Removed colour {} from palette: {}", name, self.name));
        true
    }

    /// Remove every colour.
    ///
    /// Logs exactly one event, even when the palette held no colours.
    pub fn clear_colours(&mut self) {
        self.colours.clear();
        self.log
            .log_event(format!("Deleted all colours from {} palette.", self.name));
    }

    /// Nest a palette inside this one, taking ownership of it.
    ///
    /// Refuses this palette itself with [`SwatchError::CurrentPalette`] and
    /// an already-nested palette with `Ok(false)`; state is unchanged in
    /// both cases.
    pub fn add_sub_colour_palette(&mut self, palette: ColourPalette) -> Result<bool> {
        if palette.id == self.id {
            return Err(SwatchError::CurrentPalette {
                name: self.name.clone(),
                help: None,
            });
        }
        if self.contains_sub_colour_palette(&palette) {
            return Ok(false);
        }
        self.log.log_event(format!(
            "Added sub colour palette {} to {}",
            palette.name, self.name
        ));
        self.sub_palettes.push(palette);
        Ok(true)
    }

    /// Remove a nested palette, dropping it.
    ///
    /// Refuses this palette itself with [`SwatchError::CurrentPalette`];
    /// a palette that is not nested here yields `Ok(false)`.
    pub fn delete_sub_colour_palette(&mut self, palette: &ColourPalette) -> Result<bool> {
        if palette.id == self.id {
            return Err(SwatchError::CurrentPalette {
                name: self.name.clone(),
                help: None,
            });
        }
        let Some(index) = self.sub_palettes.iter().position(|p| p.id == palette.id) else {
            return Ok(false);
        };
        let removed = self.sub_palettes.remove(index);
        self.log.log_event(format!(
            "Deleted sub colour palette {} from {}",
            removed.name, self.name
        ));
        Ok(true)
    }

    /// Remove and return the first nested palette with the given name.
    ///
    /// The removal is logged the same way as [`Self::delete_sub_colour_palette`];
    /// the returned palette is intact and can be nested elsewhere.
    pub fn take_sub_colour_palette(&mut self, name: &str) -> Option<ColourPalette> {
        let index = self.sub_palettes.iter().position(|p| p.name == name)?;
        let palette = self.sub_palettes.remove(index);
        self.log.log_event(format!(
            "Deleted sub colour palette {} from {}",
            palette.name, self.name
        ));
        Some(palette)
    }

    /// Check whether the given palette is already nested here.
    ///
    /// Pure query; never logs.
    pub fn contains_sub_colour_palette(&self, palette: &ColourPalette) -> bool {
        self.sub_palettes.iter().any(|p| p.id == palette.id)
    }

    /// First nested palette with the given name.
    pub fn sub_colour_palette(&self, name: &str) -> Option<&ColourPalette> {
        self.sub_palettes.iter().find(|p| p.name == name)
    }

    /// Mutable access to the first nested palette with the given name.
    pub fn sub_colour_palette_mut(&mut self, name: &str) -> Option<&mut ColourPalette> {
        self.sub_palettes.iter_mut().find(|p| p.name == name)
    }

    /// Colours in insertion order.
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    /// Nested palettes in insertion order.
    pub fn sub_colour_palettes(&self) -> &[ColourPalette] {
        &self.sub_palettes
    }

    /// Number of colours.
    pub fn num_colours(&self) -> usize {
        self.colours.len()
    }

    /// Number of nested palettes.
    pub fn num_sub_colour_palettes(&self) -> usize {
        self.sub_palettes.len()
    }
}

impl PartialEq for ColourPalette {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ColourPalette {}
