//! Show command implementation.
//!
//! Prints one palette in detail: its colours with swatches, then its
//! immediate sub-palettes.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Manifest;
use crate::error::{Result, SwatchError};
use crate::events::EventLog;
use crate::output::{plural, Printer};
use crate::persistence::load_store;

/// Show one palette in detail
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Path of the palette to show (slash-separated for nested palettes)
    #[arg(required = true)]
    pub path: String,

    /// Store file to use instead of the manifest's
    #[arg(long)]
    pub store: Option<PathBuf>,
}

pub fn run(args: ShowArgs, printer: &Printer) -> Result<()> {
    let manifest = Manifest::load_or_default(Path::new("."))?;
    let store = manifest.effective_store(args.store.as_deref());
    let registry = load_store(&store, &EventLog::shared())?;

    let Some(palette) = registry.find_path(&args.path) else {
        return Err(SwatchError::NotFound {
            path: args.path,
            help: Some("Use 'swatch list' to see palette paths".to_string()),
        });
    };

    println!("{}", printer.bold(palette.name()));

    if palette.colours().is_empty() && palette.sub_colour_palettes().is_empty() {
        println!("  {}", printer.dim("(empty)"));
        return Ok(());
    }

    for colour in palette.colours() {
        println!(
            "  {} {} {}",
            printer.colour_block(colour),
            colour.name(),
            printer.dim(colour.hex())
        );
    }

    for sub in palette.sub_colour_palettes() {
        println!(
            "  {} {}",
            printer.cyan(sub.name()),
            printer.dim(&format!(
                "({})",
                plural(sub.num_colours(), "colour", "colours")
            ))
        );
    }

    Ok(())
}
