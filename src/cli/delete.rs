//! Delete command implementation.
//!
//! Deletes a root palette along with its colours and sub-palettes.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Manifest;
use crate::error::{Result, SwatchError};
use crate::events::EventLog;
use crate::output::{display_path, plural, Printer};
use crate::persistence::{load_store, save_store};

/// Delete a root palette and everything in it
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Root palette to delete
    #[arg(required = true)]
    pub name: String,

    /// Store file to use instead of the manifest's
    #[arg(long)]
    pub store: Option<PathBuf>,
}

pub fn run(args: DeleteArgs, printer: &Printer) -> Result<()> {
    let manifest = Manifest::load_or_default(Path::new("."))?;
    let store = manifest.effective_store(args.store.as_deref());
    let mut registry = load_store(&store, &EventLog::shared())?;

    let Some(removed) = registry.remove_palette(&args.name) else {
        return Err(SwatchError::NotFound {
            path: args.name,
            help: Some("Only root palettes can be deleted; unnest first".to_string()),
        });
    };

    save_store(&store, &registry, manifest.pretty)?;
    printer.status(
        "Deleted",
        &format!(
            "{} ({}, {})",
            args.name,
            plural(removed.num_colours(), "colour", "colours"),
            plural(removed.num_sub_colour_palettes(), "sub-palette", "sub-palettes")
        ),
    );
    printer.success("Updated", &display_path(&store));

    Ok(())
}
