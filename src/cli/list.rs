//! List command implementation.
//!
//! Prints the palette tree with colour swatches and counts.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Manifest;
use crate::error::Result;
use crate::events::EventLog;
use crate::output::{display_path, plural, Printer};
use crate::persistence::load_store;
use crate::types::ColourPalette;

/// List every palette in the store as a tree
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Store file to use instead of the manifest's
    #[arg(long)]
    pub store: Option<PathBuf>,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let manifest = Manifest::load_or_default(Path::new("."))?;
    let store = manifest.effective_store(args.store.as_deref());
    let registry = load_store(&store, &EventLog::shared())?;

    printer.info("Store", &display_path(&store));

    if registry.is_empty() {
        println!("{}", printer.dim("(no palettes yet)"));
        return Ok(());
    }

    for palette in registry.palettes() {
        print_tree(palette, 0, printer);
    }

    Ok(())
}

fn print_tree(palette: &ColourPalette, depth: usize, printer: &Printer) {
    let indent = "  ".repeat(depth);
    let counts = format!(
        "({}, {})",
        plural(palette.num_colours(), "colour", "colours"),
        plural(
            palette.num_sub_colour_palettes(),
            "sub-palette",
            "sub-palettes"
        )
    );
    println!(
        "{}{} {}",
        indent,
        printer.bold(palette.name()),
        printer.dim(&counts)
    );

    for colour in palette.colours() {
        println!(
            "{}  {} {} {}",
            indent,
            printer.colour_block(colour),
            colour.name(),
            printer.dim(colour.hex())
        );
    }

    for sub in palette.sub_colour_palettes() {
        print_tree(sub, depth + 1, printer);
    }
}
