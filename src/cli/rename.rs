//! Rename command implementation.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Manifest;
use crate::error::{Result, SwatchError};
use crate::events::EventLog;
use crate::output::{display_path, Printer};
use crate::persistence::{load_store, save_store};

/// Rename a palette
#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Path of the palette to rename
    #[arg(required = true)]
    pub path: String,

    /// New name
    #[arg(required = true)]
    pub name: String,

    /// Store file to use instead of the manifest's
    #[arg(long)]
    pub store: Option<PathBuf>,
}

pub fn run(args: RenameArgs, printer: &Printer) -> Result<()> {
    if args.name.trim().is_empty() {
        return Err(SwatchError::Usage {
            message: "palette name cannot be empty".to_string(),
            help: Some("Don't be shy, give your palette a name".to_string()),
        });
    }

    let manifest = Manifest::load_or_default(Path::new("."))?;
    let store = manifest.effective_store(args.store.as_deref());
    let mut registry = load_store(&store, &EventLog::shared())?;

    // A root rename must not collide with another root
    let renaming_root = !args.path.contains('/');
    if renaming_root && args.path != args.name && registry.get(&args.name).is_some() {
        return Err(SwatchError::Duplicate {
            name: args.name,
            help: Some("Root palette names must be unique".to_string()),
        });
    }

    let Some(palette) = registry.find_path_mut(&args.path) else {
        return Err(SwatchError::NotFound {
            path: args.path,
            help: Some("Use 'swatch list' to see palette paths".to_string()),
        });
    };

    let old = palette.name().to_string();
    palette.set_name(args.name.as_str());

    save_store(&store, &registry, manifest.pretty)?;
    printer.status("Renamed", &format!("{} to {}", old, args.name));
    printer.success("Updated", &display_path(&store));

    Ok(())
}
