pub mod add;
pub mod completions;
pub mod delete;
pub mod init;
pub mod list;
pub mod nest;
pub mod new;
pub mod remove;
pub mod rename;
pub mod show;
pub mod unnest;
pub mod validate;

use clap::{Parser, Subcommand};

/// swatch - Colour palette organizer
#[derive(Parser, Debug)]
#[command(name = "swatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print the event log after the command finishes
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a swatch project (generates swatch.yaml and an empty store)
    Init(init::InitArgs),

    /// Create a new root palette
    New(new::NewArgs),

    /// Add a colour to a palette
    Add(add::AddArgs),

    /// Remove a colour from a palette, or clear all of them
    Remove(remove::RemoveArgs),

    /// Move a root palette inside another palette
    Nest(nest::NestArgs),

    /// Pull a sub-palette back out to the top level
    Unnest(unnest::UnnestArgs),

    /// Rename a palette
    Rename(rename::RenameArgs),

    /// Delete a root palette and everything in it
    Delete(delete::DeleteArgs),

    /// List every palette in the store as a tree
    List(list::ListArgs),

    /// Show one palette in detail
    Show(show::ShowArgs),

    /// Validate a store file without loading it
    Validate(validate::ValidateArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
