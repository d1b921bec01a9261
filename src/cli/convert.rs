//! Convert command implementation.
//!
//! Reads a compendium XML file and writes an rpg-card JSON deck.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::builder::PossibleValuesParser;
use clap::Args;

use crate::config::Manifest;
use crate::error::{CardError, Result};
use crate::output::{display_path, plural, Printer};
use crate::parser::parse_compendium;
use crate::pipeline::{convert, to_json, SourcebookStyle, TagSource};
use crate::registry::category_names;

/// Convert a compendium file into rpg-card JSON
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Compendium XML file to read
    pub input: PathBuf,

    /// JSON file to write (stdout if omitted)
    pub output: Option<PathBuf>,

    /// Category to convert; repeat for several (default: all supported)
    #[arg(
        short = 'c',
        long = "category",
        value_name = "CATEGORY",
        value_parser = PossibleValuesParser::new(category_names())
    )]
    pub categories: Vec<String>,

    /// Field to add as card tags; repeat for several
    #[arg(short = 't', long = "tag", value_name = "TAG", value_enum)]
    pub tags: Vec<TagSource>,

    /// How sourcebook tags are written
    #[arg(long, value_enum)]
    pub sourcebook: Option<SourcebookStyle>,

    /// Manifest file (default: ./cards.yaml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON indentation width
    #[arg(long)]
    pub indent: Option<usize>,
}

pub fn run(args: ConvertArgs, printer: &Printer) -> Result<()> {
    let manifest = load_manifest(args.config.as_deref())?;
    let options = manifest.options(&args.categories, &args.tags, args.sourcebook);
    let output = args.output.clone().or_else(|| manifest.output.clone());
    let indent = args.indent.unwrap_or_else(|| manifest.effective_indent());

    printer.status("Reading", &display_path(&args.input));
    let source = fs::read_to_string(&args.input).map_err(|e| CardError::Io {
        path: args.input.clone(),
        message: format!("Failed to read compendium: {}", e),
    })?;

    let compendium = parse_compendium(&source)?;
    let conversion = convert(&compendium, &options)?;

    for (label, count) in &conversion.counts {
        printer.status("Converted", &format!("{} {}", count, label));
    }
    conversion.diagnostics.print(printer);
    if conversion.diagnostics.has_errors() {
        let skipped = conversion.diagnostics.error_count();
        printer.warning("Skipped", &plural(skipped, "entry", "entries"));
    }

    let json = to_json(&conversion.cards, indent)?;
    let total = plural(conversion.cards.len(), "card", "cards");

    match output {
        Some(path) => {
            write_output(&path, &json)?;
            printer.status("Finished", &format!("{} -> {}", total, display_path(&path)));
        }
        None => {
            write_json(&mut io::stdout().lock(), &json)?;
            printer.status("Finished", &total);
        }
    }

    Ok(())
}

fn load_manifest(path: Option<&Path>) -> Result<Manifest> {
    match path {
        Some(path) => Manifest::load(path),
        None => Ok(Manifest::discover(Path::new("."))?.unwrap_or_default()),
    }
}

/// Write the deck followed by a newline to a stream.
fn write_json(out: &mut impl Write, json: &str) -> Result<()> {
    writeln!(out, "{}", json)?;
    out.flush()?;
    Ok(())
}

fn write_output(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| CardError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    fs::write(path, json).map_err(|e| CardError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write output: {}", e),
    })
}
