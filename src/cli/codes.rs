//! Codes command implementation.
//!
//! Prints the abbreviation tables as `code  label` lines on stdout.

use std::io::{self, Write};

use clap::builder::PossibleValuesParser;
use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::types::codes::{all_tables, table_by_name, CodeTable};

/// Print the code tables used to expand abbreviations
#[derive(Args, Debug)]
pub struct CodesArgs {
    /// Table to print (default: all)
    #[arg(value_parser = PossibleValuesParser::new(["type", "property", "damage"]))]
    pub table: Option<String>,
}

pub fn run(args: CodesArgs, printer: &Printer) -> Result<()> {
    let tables: Vec<&CodeTable> = match args.table.as_deref().and_then(table_by_name) {
        Some(table) => vec![table],
        None => all_tables().to_vec(),
    };

    let mut out = io::stdout().lock();
    for table in tables {
        let count = printer.dim(&format!("({})", table.len()));
        printer.info("Table", &format!("{} {}", table.name(), count));
        write_table(&mut out, table)?;
    }

    Ok(())
}

fn write_table(out: &mut impl Write, table: &CodeTable) -> Result<()> {
    for line in render_table(table) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Render a table as aligned `code  label` lines.
fn render_table(table: &CodeTable) -> Vec<String> {
    let width = table.iter().map(|(code, _)| code.len()).max().unwrap_or(0);
    table
        .iter()
        .map(|(code, label)| format!("{code:<width$}  {label}"))
        .collect()
}
