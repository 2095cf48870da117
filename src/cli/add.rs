//! Add command implementation.
//!
//! Adds a colour to a palette anywhere in the tree.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Manifest;
use crate::error::{Result, SwatchError};
use crate::events::EventLog;
use crate::output::{display_path, Printer};
use crate::persistence::{load_store, save_store};
use crate::types::Colour;
use crate::validation::well_formed_hex;

/// Add a colour to a palette
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Path to the palette (slash-separated for nested palettes)
    #[arg(required = true)]
    pub palette: String,

    /// Colour name
    #[arg(required = true)]
    pub name: String,

    /// Colour value as #RRGGBB
    #[arg(required = true)]
    pub hex: String,

    /// Store file to use instead of the manifest's
    #[arg(long)]
    pub store: Option<PathBuf>,
}

pub fn run(args: AddArgs, printer: &Printer) -> Result<()> {
    if args.name.trim().is_empty() {
        return Err(SwatchError::Usage {
            message: "colour name cannot be empty".to_string(),
            help: Some("Don't be shy, give your colour a name".to_string()),
        });
    }
    if !well_formed_hex(&args.hex) {
        return Err(SwatchError::Usage {
            message: format!("'{}' is not a hex colour", args.hex),
            help: Some("Enter colour values in the format #RRGGBB".to_string()),
        });
    }

    let manifest = Manifest::load_or_default(Path::new("."))?;
    let store = manifest.effective_store(args.store.as_deref());
    let mut registry = load_store(&store, &EventLog::shared())?;

    let Some(palette) = registry.find_path_mut(&args.palette) else {
        return Err(SwatchError::NotFound {
            path: args.palette,
            help: Some("Use 'swatch list' to see palette paths".to_string()),
        });
    };

    let added = palette.add_colour(Colour::new(args.name.as_str(), args.hex.as_str()));

    if added {
        printer.status(
            "Added",
            &format!("{} ({}) to {}", args.name, args.hex, args.palette),
        );
        save_store(&store, &registry, manifest.pretty)?;
        printer.success("Updated", &display_path(&store));
    } else {
        printer.warning(
            "Unchanged",
            &format!("{} already has colour {}", args.palette, args.name),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::PaletteRegistry;
    use crate::types::ColourPalette;
    use tempfile::tempdir;

    fn seeded_store(dir: &tempfile::TempDir) -> PathBuf {
        let store = dir.path().join("palettes.json");
        let log = EventLog::new();

        let mut sunset = ColourPalette::with_log("Sunset Colours", log.clone());
        let mut warm = ColourPalette::with_log("Warm Colours", log);
        warm.add_colour(Colour::new("Ochre", "#CC7722"));
        sunset.add_sub_colour_palette(warm).unwrap();

        let mut registry = PaletteRegistry::new();
        registry.add_palette(sunset);
        save_store(&store, &registry, true).unwrap();
        store
    }

    #[test]
    fn test_add_to_root_palette() {
        let dir = tempdir().unwrap();
        let store = seeded_store(&dir);

        let args = AddArgs {
            palette: "Sunset Colours".to_string(),
            name: "Red".to_string(),
            hex: "#FF0000".to_string(),
            store: Some(store.clone()),
        };
        run(args, &Printer::new()).unwrap();

        let registry = load_store(&store, &EventLog::new()).unwrap();
        let palette = registry.get("Sunset Colours").unwrap();
        assert!(palette.colours().contains(&Colour::new("Red", "#FF0000")));
    }

    #[test]
    fn test_add_to_nested_palette() {
        let dir = tempdir().unwrap();
        let store = seeded_store(&dir);

        let args = AddArgs {
            palette: "Sunset Colours/Warm Colours".to_string(),
            name: "Amber".to_string(),
            hex: "#FFBF00".to_string(),
            store: Some(store.clone()),
        };
        run(args, &Printer::new()).unwrap();

        let registry = load_store(&store, &EventLog::new()).unwrap();
        let warm = registry.find_path("Sunset Colours/Warm Colours").unwrap();
        assert_eq!(warm.num_colours(), 2);
    }

    #[test]
    fn test_add_duplicate_is_not_an_error() {
        let dir = tempdir().unwrap();
        let store = seeded_store(&dir);

        let args = AddArgs {
            palette: "Sunset Colours/Warm Colours".to_string(),
            name: "Ochre".to_string(),
            hex: "#CC7722".to_string(),
            store: Some(store.clone()),
        };
        run(args, &Printer::new()).unwrap();

        let registry = load_store(&store, &EventLog::new()).unwrap();
        let warm = registry.find_path("Sunset Colours/Warm Colours").unwrap();
        assert_eq!(warm.num_colours(), 1);
    }

    #[test]
    fn test_add_unknown_palette() {
        let dir = tempdir().unwrap();
        let store = seeded_store(&dir);

        let args = AddArgs {
            palette: "Ocean Colours".to_string(),
            name: "Teal".to_string(),
            hex: "#008080".to_string(),
            store: Some(store),
        };
        assert!(matches!(
            run(args, &Printer::new()),
            Err(SwatchError::NotFound { .. })
        ));
    }

    #[test]
    fn test_add_rejects_bad_hex() {
        let dir = tempdir().unwrap();
        let store = seeded_store(&dir);

        let args = AddArgs {
            palette: "Sunset Colours".to_string(),
            name: "Red".to_string(),
            hex: "red".to_string(),
            store: Some(store),
        };
        assert!(matches!(
            run(args, &Printer::new()),
            Err(SwatchError::Usage { .. })
        ));
    }

    #[test]
    fn test_add_rejects_empty_name() {
        let dir = tempdir().unwrap();
        let store = seeded_store(&dir);

        let args = AddArgs {
            palette: "Sunset Colours".to_string(),
            name: "".to_string(),
            hex: "#FF0000".to_string(),
            store: Some(store),
        };
        assert!(matches!(
            run(args, &Printer::new()),
            Err(SwatchError::Usage { .. })
        ));
    }
}
