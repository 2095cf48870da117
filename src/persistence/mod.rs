//! Saving and loading palette trees as JSON.
//!
//! The on-disk store is a JSON array of serialized root palettes. The
//! field names (`paletteName`, `listOfColours`, `listOfSubColourPalettes`,
//! and `name`/`hex` for colours) are an external contract shared with
//! other readers of the store file; the wire structs in [`json`] pin them.

mod json;
mod store;

pub use json::{from_json, ToJson};
pub use store::{load_store, parse_store, save_store};
