//! swatch - Colour palette organizer
//!
//! A library for organizing colours into named palettes that nest inside
//! each other, with a JSON store on disk and an event log that records
//! every mutation.

pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod output;
pub mod persistence;
pub mod registry;
pub mod types;
pub mod validation;

pub use config::{Manifest, MANIFEST_FILENAME};
pub use error::{Result, SwatchError};
pub use events::{Event, EventLog};
pub use persistence::{from_json, load_store, parse_store, save_store, ToJson};
pub use registry::PaletteRegistry;
pub use types::{Colour, ColourPalette, PaletteId};
pub use validation::{validate_store, Diagnostic, Severity, ValidationResult};
