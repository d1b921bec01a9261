pub mod codes;
pub mod completions;
pub mod convert;

use clap::{Parser, Subcommand};

/// compendium-cards - Compendium XML to rpg-card JSON converter
#[derive(Parser, Debug)]
#[command(name = "compendium-cards")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a compendium file into rpg-card JSON
    Convert(convert::ConvertArgs),

    /// Print the code tables used to expand abbreviations
    Codes(codes::CodesArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
