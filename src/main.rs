use clap::Parser;
use miette::Result;
use swatch::cli::{Cli, Commands};
use swatch::events::EventLog;
use swatch::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Init(args) => swatch::cli::init::run(args, &printer)?,
        Commands::New(args) => swatch::cli::new::run(args, &printer)?,
        Commands::Add(args) => swatch::cli::add::run(args, &printer)?,
        Commands::Remove(args) => swatch::cli::remove::run(args, &printer)?,
        Commands::Nest(args) => swatch::cli::nest::run(args, &printer)?,
        Commands::Unnest(args) => swatch::cli::unnest::run(args, &printer)?,
        Commands::Rename(args) => swatch::cli::rename::run(args, &printer)?,
        Commands::Delete(args) => swatch::cli::delete::run(args, &printer)?,
        Commands::List(args) => swatch::cli::list::run(args, &printer)?,
        Commands::Show(args) => swatch::cli::show::run(args, &printer)?,
        Commands::Validate(args) => swatch::cli::validate::run(args, &printer)?,
        Commands::Completions(args) => swatch::cli::completions::run(args)?,
    }

    if cli.verbose {
        for event in EventLog::shared().events() {
            printer.info("Event", &event.to_string());
        }
    }

    Ok(())
}
