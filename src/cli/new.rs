//! New command implementation.
//!
//! Creates a root palette, optionally seeded with colours.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Manifest;
use crate::error::{Result, SwatchError};
use crate::events::EventLog;
use crate::output::{display_path, plural, Printer};
use crate::persistence::{load_store, save_store};
use crate::types::{Colour, ColourPalette};
use crate::validation::well_formed_hex;

/// Create a new root palette
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Name for the new palette
    #[arg(required = true)]
    pub name: String,

    /// Seed colour as NAME=#RRGGBB (repeatable)
    #[arg(long = "colour", value_name = "NAME=HEX")]
    pub colours: Vec<String>,

    /// Store file to use instead of the manifest's
    #[arg(long)]
    pub store: Option<PathBuf>,
}

pub fn run(args: NewArgs, printer: &Printer) -> Result<()> {
    if args.name.trim().is_empty() {
        return Err(SwatchError::Usage {
            message: "palette name cannot be empty".to_string(),
            help: Some("Don't be shy, give your palette a name".to_string()),
        });
    }

    let manifest = Manifest::load_or_default(Path::new("."))?;
    let store = manifest.effective_store(args.store.as_deref());
    let mut registry = load_store(&store, &EventLog::shared())?;

    if registry.get(&args.name).is_some() {
        return Err(SwatchError::Duplicate {
            name: args.name,
            help: Some("Root palette names must be unique".to_string()),
        });
    }

    let mut palette = ColourPalette::new(args.name.as_str());
    for spec in &args.colours {
        palette.add_colour(parse_colour_spec(spec)?);
    }

    let seeded = palette.num_colours();
    registry.add_palette(palette);

    save_store(&store, &registry, manifest.pretty)?;
    printer.status(
        "Created",
        &format!("{} ({})", args.name, plural(seeded, "colour", "colours")),
    );
    printer.success("Updated", &display_path(&store));

    Ok(())
}

/// Parse a NAME=HEX colour spec from the command line.
fn parse_colour_spec(spec: &str) -> Result<Colour> {
    let Some((name, hex)) = spec.split_once('=') else {
        return Err(SwatchError::Usage {
            message: format!("invalid colour spec '{}'", spec),
            help: Some("Use NAME=#RRGGBB, e.g. --colour Crimson=#DC143C".to_string()),
        });
    };

    let name = name.trim();
    let hex = hex.trim();

    if name.is_empty() {
        return Err(SwatchError::Usage {
            message: format!("colour spec '{}' has no name", spec),
            help: Some("Don't be shy, give your colour a name".to_string()),
        });
    }
    if !well_formed_hex(hex) {
        return Err(SwatchError::Usage {
            message: format!("'{}' is not a hex colour", hex),
            help: Some("Enter colour values in the format #RRGGBB".to_string()),
        });
    }

    Ok(Colour::new(name, hex))
}
