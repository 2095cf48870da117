//! Remove command implementation.
//!
//! Removes a single colour from a palette, or clears all of them.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Manifest;
use crate::error::{Result, SwatchError};
use crate::events::EventLog;
use crate::output::{display_path, plural, Printer};
use crate::persistence::{load_store, save_store};

/// Remove a colour from a palette, or clear all of them
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Path to the palette (slash-separated for nested palettes)
    #[arg(required = true)]
    pub palette: String,

    /// Colour name to remove
    #[arg(required_unless_present = "all", conflicts_with = "all")]
    pub name: Option<String>,

    /// Remove every colour from the palette
    #[arg(long)]
    pub all: bool,

    /// Store file to use instead of the manifest's
    #[arg(long)]
    pub store: Option<PathBuf>,
}

pub fn run(args: RemoveArgs, printer: &Printer) -> Result<()> {
    let manifest = Manifest::load_or_default(Path::new("."))?;
    let store = manifest.effective_store(args.store.as_deref());
    let mut registry = load_store(&store, &EventLog::shared())?;

    let Some(palette) = registry.find_path_mut(&args.palette) else {
        return Err(SwatchError::NotFound {
            path: args.palette,
            help: Some("Use 'swatch list' to see palette paths".to_string()),
        });
    };

    if args.all {
        let cleared = palette.num_colours();
        palette.clear_colours();
        printer.status(
            "Cleared",
            &format!(
                "{} from {}",
                plural(cleared, "colour", "colours"),
                args.palette
            ),
        );
        save_store(&store, &registry, manifest.pretty)?;
        printer.success("Updated", &display_path(&store));
        return Ok(());
    }

    let Some(name) = args.name.as_deref() else {
        return Err(SwatchError::Usage {
            message: "name a colour to remove, or pass --all".to_string(),
            help: None,
        });
    };

    if palette.delete_colour(name) {
        printer.status("Removed", &format!("{} from {}", name, args.palette));
        save_store(&store, &registry, manifest.pretty)?;
        printer.success("Updated", &display_path(&store));
    } else {
        printer.warning(
            "Unchanged",
            &format!("{} has no colour named {}", args.palette, name),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::PaletteRegistry;
    use crate::types::{Colour, ColourPalette};
    use tempfile::tempdir;

    fn seeded_store(dir: &tempfile::TempDir) -> PathBuf {
        let store = dir.path().join("palettes.json");

        let mut sunset = ColourPalette::with_log("Sunset Colours", EventLog::new());
        sunset.add_colour(Colour::new("Red", "#FF0000"));
        sunset.add_colour(Colour::new("Amber", "#FFBF00"));

        let mut registry = PaletteRegistry::new();
        registry.add_palette(sunset);
        save_store(&store, &registry, true).unwrap();
        store
    }

    #[test]
    fn test_remove_colour() {
        let dir = tempdir().unwrap();
        let store = seeded_store(&dir);

        let args = RemoveArgs {
            palette: "Sunset Colours".to_string(),
            name: Some("Red".to_string()),
            all: false,
            store: Some(store.clone()),
        };
        run(args, &Printer::new()).unwrap();

        let registry = load_store(&store, &EventLog::new()).unwrap();
        let palette = registry.get("Sunset Colours").unwrap();
        assert_eq!(palette.num_colours(), 1);
        assert_eq!(palette.colours()[0].name(), "Amber");
    }

    #[test]
    fn test_remove_all_colours() {
        let dir = tempdir().unwrap();
        let store = seeded_store(&dir);

        let args = RemoveArgs {
            palette: "Sunset Colours".to_string(),
            name: None,
            all: true,
            store: Some(store.clone()),
        };
        run(args, &Printer::new()).unwrap();

        let registry = load_store(&store, &EventLog::new()).unwrap();
        assert_eq!(registry.get("Sunset Colours").unwrap().num_colours(), 0);
    }

    #[test]
    fn test_remove_missing_colour_leaves_store_alone() {
        let dir = tempdir().unwrap();
        let store = seeded_store(&dir);
        let before = std::fs::read_to_string(&store).unwrap();

        let args = RemoveArgs {
            palette: "Sunset Colours".to_string(),
            name: Some("Teal".to_string()),
            all: false,
            store: Some(store.clone()),
        };
        run(args, &Printer::new()).unwrap();

        let after = std::fs::read_to_string(&store).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_remove_unknown_palette() {
        let dir = tempdir().unwrap();
        let store = seeded_store(&dir);

        let args = RemoveArgs {
            palette: "Ocean Colours".to_string(),
            name: Some("Teal".to_string()),
            all: false,
            store: Some(store),
        };
        assert!(matches!(
            run(args, &Printer::new()),
            Err(SwatchError::NotFound { .. })
        ));
    }
}
