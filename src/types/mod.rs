//! Core domain types for swatch.
//!
//! This module contains the fundamental types of the palette model:
//! - `Colour` - named colour entries
//! - `ColourPalette` - named, nestable collections of colours
//! - `PaletteId` - process-unique palette identity

mod colour;
mod palette;

pub use colour::Colour;
pub use palette::{ColourPalette, PaletteId};
