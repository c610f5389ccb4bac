mod config;
mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use owo_colors::OwoColorize;

#[derive(Parser)]
#[command(name = "csv2ics")]
#[command(about = "Generates a calendar from a CSV of events.")]
struct Cli {
    /// Path to the input CSV file (rows of date D/M/Y, name, description)
    input: Option<PathBuf>,

    /// Directory the .ics file is written to
    #[arg(short, long, default_value = csv2ics_core::convert::DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Calendar display name (defaults to the input file name)
    #[arg(short, long)]
    name: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let Some(input) = cli.input.as_deref() else {
        Cli::command().print_help()?;
        std::process::exit(1);
    };

    let options = config::convert_options(cli.output_dir.clone(), cli.name.clone());

    let summary = csv2ics_core::convert(input, &options)
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    let noun = if summary.event_count == 1 { "event" } else { "events" };
    println!(
        "ICS file generated: {} {}",
        summary.output_path.display().green(),
        format!("({} {})", summary.event_count, noun).dimmed()
    );

    Ok(())
}
