use std::{
    fs::File,
    io::{self, Write},
    path::PathBuf,
};

use clap::{CommandFactory, Parser};
use costs::{
    domain::{
        policy::{ParsePolicy, SkipPolicy},
        summary::Summary,
    },
    error::{Error, Result},
    loader::{self, LoadOptions},
    report,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "costs")]
/// Summarises a CSV of cost records by date.
struct Cli {
    /// Path to the CSV costs file.
    file: Option<PathBuf>,
    #[arg(long)]
    /// Skips rows whose cost is not a number instead of rejecting the file.
    lenient: bool,
    #[arg(long)]
    /// Logs a warning for every row with too few fields.
    warn_skipped: bool,
    #[arg(short, long, value_name = "PATH")]
    /// Also writes the per-date summary as CSV to this file.
    output: Option<PathBuf>,
    #[arg(short, long)]
    /// Enables debug logging.
    verbose: bool,
}

impl Cli {
    fn load_options(&self) -> LoadOptions {
        LoadOptions {
            skip: if self.warn_skipped {
                SkipPolicy::Warn
            } else {
                SkipPolicy::Silent
            },
            parse: if self.lenient {
                ParsePolicy::Lenient
            } else {
                ParsePolicy::Strict
            },
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Loads, summarises and prints to `out`. Running without a file only prints
/// the usage line and still succeeds.
fn run(cli: &Cli, mut out: impl Write) -> Result<()> {
    let Some(path) = &cli.file else {
        writeln!(out, "{}", Cli::command().render_usage()).map_err(Error::ReportError)?;
        return Ok(());
    };

    let records = loader::load(path, cli.load_options());
    let summary = Summary::from_records(records);

    report::render(&summary, &mut out).map_err(Error::ReportError)?;

    if let Some(output) = &cli.output {
        let file = File::create(output).map_err(Error::ExportError)?;
        loader::write(&summary, file)?;
        info!(path = %output.display(), "Wrote summary CSV");
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    run(&cli, io::stdout().lock())
}
