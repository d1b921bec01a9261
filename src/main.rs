use clap::Parser;
use compendium_cards::cli::{Cli, Commands};
use compendium_cards::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Convert(args) => compendium_cards::cli::convert::run(args, &printer)?,
        Commands::Codes(args) => compendium_cards::cli::codes::run(args, &printer)?,
        Commands::Completions(args) => compendium_cards::cli::completions::run(args)?,
    }

    Ok(())
}
