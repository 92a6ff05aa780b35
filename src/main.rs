use clap::{ArgAction, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use pipeline_demo::config::AppConfig;
use pipeline_demo::greeter;
use pipeline_demo::logging::{init_logging, LoggingConfig};
use pipeline_demo::{AppError, BuildReport};

#[derive(Parser, Debug)]
#[command(name = "pipeline-demo")]
#[command(version)]
#[command(about = "Prints a build report for multibranch pipeline smoke tests")]
struct Cli {
    /// Disable logging entirely
    #[arg(long, short)]
    quiet: bool,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(long, short, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Configuration file (default: ./pipeline-demo.toml if present)
    #[arg(long, short, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the toolchain this binary was built with
    Env,
}

/// Resolve the logging setup. `None` means logging stays uninitialized.
fn logging_config(cli: &Cli, app_config: &AppConfig) -> Option<LoggingConfig> {
    if cli.quiet {
        return None;
    }

    let logging = if cli.verbose > 0 {
        LoggingConfig::from_verbosity(cli.verbose)
    } else {
        LoggingConfig::new().with_level(app_config.log_level.unwrap_or_default())
    };

    Some(logging.with_timestamps(app_config.log_timestamps))
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Env) => {
            writeln!(out, "{}", greeter::environment_info())?;
        }
        None => {
            let report = BuildReport::capture();
            tracing::info!(timestamp = %report.timestamp(), "build report captured");
            report.write_to(&mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Only an explicit --config may stop the run; the implicit file and env
    // overrides fall back to defaults so the report is always printed.
    let (app_config, ignored) = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) if cli.config.is_none() => (AppConfig::default(), Some(e)),
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(logging) = logging_config(&cli, &app_config) {
        init_logging(logging);
    }
    if let Some(e) = ignored {
        tracing::warn!("ignoring configuration, using defaults: {}", e);
    }
    tracing::debug!(?app_config, "configuration loaded");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_broken_pipe() => {
            tracing::debug!("stdout closed before the report was written");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
