use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::debug;
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use ncchecknodefile::config::{parse_node_file_arg, CheckConfig, OutputFormat, DEFAULT_NODE_FILE};
use ncchecknodefile::validator::{self, Outcome};
use ncchecknodefile::report;

/// Checks the integrity of a NerveCenter node file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = LONG_ABOUT)]
struct Args {
    /// Node file to check
    #[arg(short, long, value_name = "NODEFILE", default_value = DEFAULT_NODE_FILE, value_parser = parse_node_file_arg)]
    file: PathBuf,

    /// Talkative mode. Default is to be quiet and only speak up if something is wrong
    #[arg(short, long)]
    verbose: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

const LONG_ABOUT: &str = "\
Checks the integrity of a NerveCenter node file. It reads but does not
modify the indicated file.

Warnings and errors are stated as they are encountered. When finished it
states the file's node count and how many errors and warnings were found.

Exit status is 0 when no errors were found, 1 when duplicate ids or names
were found, and 2 when the file cannot be read or the command line is
malformed.";

impl Args {
    fn into_config(self) -> CheckConfig {
        CheckConfig::new(self.file)
            .with_verbose(self.verbose)
            .with_format(self.format)
    }
}

fn main() -> Result<ExitCode> {
    // Initialize error handling
    color_eyre::install()?;

    // Usage errors exit with status 2
    let args = Args::parse();

    // Logs go to stderr; stdout carries the report
    env_logger::Builder::from_env(Env::default().default_filter_or(default_log_filter(args.verbose))).init();

    let config = args.into_config();
    let stdout = io::stdout();
    let outcome = run(&config, &mut stdout.lock())?;

    Ok(ExitCode::from(outcome.exit_code()))
}

/// Log filter used when `RUST_LOG` is unset
fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "info"
    } else {
        "warn"
    }
}

/// Check the configured node file and print the result to `out`
fn run<W: Write>(config: &CheckConfig, out: &mut W) -> Result<Outcome> {
    if config.format == OutputFormat::Text {
        writeln!(out, "{}", report::header_line(&config.file_path)).wrap_err("Failed to write header")?;
    }

    let result = match validator::check_file(config) {
        Ok(result) => result,
        Err(err) => {
            debug!("{}: {:?}", err, err.source());
            writeln!(out, "{}", err).wrap_err("Failed to write error")?;
            return Ok(Outcome::Fatal);
        }
    };

    match config.format {
        OutputFormat::Text => report::write_text(&result, out)?,
        OutputFormat::Json => report::write_json(&result, out)?,
    }
    out.flush().wrap_err("Failed to flush report")?;

    Ok(result.outcome())
}
