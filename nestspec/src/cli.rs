//! Command-line wrapper around a [`Runner`].
//!
//! Spec binaries hand their runner to [`main`], which parses flags, loads
//! `nestspec.toml`, prints the report and exits with a code from
//! [`exit_codes`].

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::exit_codes;
use crate::format::{SimpleFormat, VerboseFormat};
use crate::io::config::{FormatKind, RunnerConfig, load_config};
use crate::io::report::write_report;
use crate::results::Results;
use crate::runner::Runner;

#[derive(Debug, Parser)]
#[command(name = "nestspec", version, about = "Run nested behavior specs")]
pub struct Cli {
    /// Report layout (overrides the config file).
    #[arg(long, value_enum)]
    pub format: Option<FormatKind>,

    /// Only run root specs whose name contains this substring.
    #[arg(long)]
    pub filter: Option<String>,

    /// Path to the TOML config file. A missing file means defaults.
    #[arg(long, default_value = "nestspec.toml")]
    pub config: PathBuf,

    /// Also write the results as JSON to this path.
    #[arg(long)]
    pub json: Option<PathBuf>,
}

/// Run `runner` with the process arguments and exit.
pub fn main(runner: &Runner<'_>) -> ! {
    crate::logging::init();
    let code = run(runner, std::env::args_os(), &mut std::io::stdout().lock());
    std::process::exit(code)
}

/// Parse `args`, run the specs and write the report to `out`.
///
/// Returns the process exit code instead of exiting.
pub fn run<I, T>(runner: &Runner<'_>, args: I, out: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            if let Err(print_err) = err.print() {
                debug!(error = %print_err, "could not print argument error");
            }
            return if err.use_stderr() {
                exit_codes::INVALID
            } else {
                exit_codes::OK
            };
        }
    };

    match execute(runner, &cli, out) {
        Ok(results) if results.is_success() => exit_codes::OK,
        Ok(_) => exit_codes::FAILED,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    }
}

fn execute(runner: &Runner<'_>, cli: &Cli, out: &mut dyn Write) -> Result<Results> {
    let config = resolve_config(cli)?;
    debug!(?config, "resolved config");

    let results = match &config.filter {
        Some(filter) => runner.run_where(|name| name.contains(filter.as_str())),
        None => runner.run(),
    };

    let printed = match config.format {
        FormatKind::Verbose => results.print(&mut VerboseFormat::new(&mut *out)),
        FormatKind::Simple => results.print(&mut SimpleFormat::new(&mut *out)),
    };
    printed.context("write report")?;
    out.flush().context("flush report")?;

    if let Some(path) = &config.json_report {
        write_report(path, &results)?;
    }
    Ok(results)
}

/// Merge command-line flags over the config file.
fn resolve_config(cli: &Cli) -> Result<RunnerConfig> {
    let mut config = load_config(&cli.config)?;
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(filter) = &cli.filter {
        config.filter = Some(filter.clone());
    }
    if let Some(json) = &cli.json {
        config.json_report = Some(json.clone());
    }
    config.validate()?;
    Ok(config)
}
