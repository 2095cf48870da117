//! Nest command implementation.
//!
//! Moves a root palette inside another palette. The moved palette keeps its
//! colours and sub-palettes; it just stops being a root.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Manifest;
use crate::error::{Result, SwatchError};
use crate::events::EventLog;
use crate::output::{display_path, Printer};
use crate::persistence::{load_store, save_store};

/// Move a root palette inside another palette
#[derive(Args, Debug)]
pub struct NestArgs {
    /// Root palette to move
    #[arg(required = true)]
    pub child: String,

    /// Path of the palette that will contain it
    #[arg(required = true)]
    pub parent: String,

    /// Store file to use instead of the manifest's
    #[arg(long)]
    pub store: Option<PathBuf>,
}

pub fn run(args: NestArgs, printer: &Printer) -> Result<()> {
    // The parent path must not run through the child, or we would be nesting
    // a palette inside itself
    if args.parent == args.child || args.parent.starts_with(&format!("{}/", args.child)) {
        return Err(SwatchError::CurrentPalette {
            name: args.child,
            help: Some("Pick a parent outside the palette being moved".to_string()),
        });
    }

    let manifest = Manifest::load_or_default(Path::new("."))?;
    let store = manifest.effective_store(args.store.as_deref());
    let mut registry = load_store(&store, &EventLog::shared())?;

    let Some(child) = registry.remove_palette(&args.child) else {
        return Err(SwatchError::NotFound {
            path: args.child,
            help: Some("Only root palettes can be nested; use 'swatch list'".to_string()),
        });
    };

    let nested = match registry.find_path_mut(&args.parent) {
        Some(parent) => parent.add_sub_colour_palette(child)?,
        None => {
            // Put the detached child back before bailing out
            registry.add_palette(child);
            return Err(SwatchError::NotFound {
                path: args.parent,
                help: Some("Use 'swatch list' to see palette paths".to_string()),
            });
        }
    };

    if nested {
        printer.status("Nested", &format!("{} inside {}", args.child, args.parent));
        save_store(&store, &registry, manifest.pretty)?;
        printer.success("Updated", &display_path(&store));
    } else {
        printer.warning(
            "Unchanged",
            &format!("{} already contains {}", args.parent, args.child),
        );
    }

    Ok(())
}
