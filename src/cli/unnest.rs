//! Unnest command implementation.
//!
//! Pulls a sub-palette out of its parent and makes it a root palette again.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Manifest;
use crate::error::{Result, SwatchError};
use crate::events::EventLog;
use crate::output::{display_path, Printer};
use crate::persistence::{load_store, save_store};

/// Pull a sub-palette back out to the top level
#[derive(Args, Debug)]
pub struct UnnestArgs {
    /// Path of the sub-palette to promote (e.g. "Sunset Colours/Warm Colours")
    #[arg(required = true)]
    pub path: String,

    /// Store file to use instead of the manifest's
    #[arg(long)]
    pub store: Option<PathBuf>,
}

pub fn run(args: UnnestArgs, printer: &Printer) -> Result<()> {
    let manifest = Manifest::load_or_default(Path::new("."))?;
    let store = manifest.effective_store(args.store.as_deref());
    let mut registry = load_store(&store, &EventLog::shared())?;

    let Some((parent_path, name)) = args.path.rsplit_once('/') else {
        return if registry.get(&args.path).is_some() {
            Err(SwatchError::Usage {
                message: format!("'{}' is already a root palette", args.path),
                help: None,
            })
        } else {
            Err(SwatchError::NotFound {
                path: args.path,
                help: Some("Give the nested path, e.g. 'Sunset Colours/Warm Colours'".to_string()),
            })
        };
    };

    // Promoting would collide with an existing root of the same name
    if registry.get(name).is_some() {
        return Err(SwatchError::Duplicate {
            name: name.to_string(),
            help: Some("Rename one of them first".to_string()),
        });
    }

    let child = match registry.find_path_mut(parent_path) {
        Some(parent) => parent.take_sub_colour_palette(name),
        None => None,
    };
    let Some(child) = child else {
        return Err(SwatchError::NotFound {
            path: args.path,
            help: Some("Use 'swatch list' to see palette paths".to_string()),
        });
    };

    registry.add_palette(child);

    printer.status("Unnested", &format!("{} from {}", name, parent_path));
    save_store(&store, &registry, manifest.pretty)?;
    printer.success("Updated", &display_path(&store));

    Ok(())
}
