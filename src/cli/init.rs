//! Init command implementation.
//!
//! Generates a `swatch.yaml` manifest and seeds an empty palette store.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{Manifest, MANIFEST_FILENAME};
use crate::error::{Result, SwatchError};
use crate::output::{display_path, Printer};

/// Initialize a swatch project by generating a swatch.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing swatch.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(SwatchError::Usage {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let manifest = Manifest::default();
    let yaml = format!(
        "store: {}\npretty: {}\n",
        manifest.store.display(),
        manifest.pretty
    );
    fs::write(&manifest_path, yaml).map_err(|e| SwatchError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    // Seed an empty store, but never clobber an existing one (--force only
    // regenerates the manifest)
    let store_path = args.path.join(&manifest.store);
    if !store_path.exists() {
        fs::write(&store_path, "[]\n").map_err(|e| SwatchError::Io {
            path: store_path.clone(),
            message: format!("Failed to write store: {}", e),
        })?;
    }

    printer.success(
        "Created",
        &format!("{} ({})", MANIFEST_FILENAME, display_path(&store_path)),
    );

    Ok(())
}
