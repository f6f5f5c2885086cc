use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use marketlint::{Options, Reporter};

#[derive(Parser)]
#[command(
    name = "marketlint",
    version,
    about = "Validate a Claude plugin marketplace directory tree"
)]
pub struct Cli {
    /// Marketplace root containing `.claude-plugin/` and `plugins/`
    root: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Also check kebab-case names and agent header keys
    #[arg(long)]
    strict: bool,

    /// Log each visited file (overridden by RUST_LOG)
    #[arg(long, short)]
    verbose: bool,
}

/// Output format for validation results.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum Format {
    /// One line per file plus a summary (default)
    #[default]
    Text,
    /// JSON array of per-file results
    Json,
}

impl From<Format> for marketlint::Format {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => marketlint::Format::Text,
            Format::Json => marketlint::Format::Json,
        }
    }
}

/// Parse arguments, exiting with status 1 on usage errors.
///
/// `--help` and `--version` still exit with status 0.
pub fn parse() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    }
}

pub fn run(cli: Cli) -> ExitCode {
    init_tracing(cli.verbose);

    let options = Options { strict: cli.strict };
    let mut reporter = Reporter::stdio(cli.format.into());

    if let Err(e) = marketlint::validate_tree(&cli.root, &options, &mut reporter) {
        reporter.fatal(&e);
    }

    if reporter.finish() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Install the stderr log subscriber. `RUST_LOG` takes precedence.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
