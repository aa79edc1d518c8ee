#![deny(clippy::pedantic, unsafe_code)]

//! scopedir - scoped temporary directories from the command line

mod cli;
mod settings;

use clap::Parser;
use cli::{Cli, Commands};
use scopedir_errors::{Error, UserFacingError};
use scopedir_tempdir::{Config, LogSink, TempDir};
use std::ffi::OsString;
use std::io::Write;
use std::process::{Command, ExitCode};

/// Environment variable carrying the directory path into `run` commands
const PATH_ENV: &str = "SCOPEDIR_PATH";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.global.debug);

    match execute(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            if let Some(hint) = e.user_hint() {
                eprintln!("  Hint: {hint}");
            }
            if e.is_retryable() {
                eprintln!("  The failure looks transient; running the command again may succeed.");
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(debug: bool) {
    let default_filter = if debug {
        "warn,scopedir=debug,scopedir_tempdir=debug,scopedir_config=debug"
    } else {
        "warn"
    };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .try_init();
}

fn execute(cli: Cli) -> Result<ExitCode, Error> {
    let config = settings::resolve(&cli.global)?;
    tracing::debug!(
        root = %config.root_path.display(),
        prefix = %config.prefix,
        cleanup = %config.cleanup,
        "resolved configuration"
    );

    match cli.command {
        Commands::Run { command } => run_in_dir(TempDir::with_config(config)?, &command),
        Commands::Create { json } => {
            let config = if json { event_lines_to_stderr(config) } else { config };
            let path = TempDir::with_config(config)?.persist();
            if json {
                println!("{}", serde_json::json!({ "path": path.display().to_string() }));
            } else {
                println!("{}", path.display());
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Keep stdout machine readable: a stdout event sink is moved to stderr
fn event_lines_to_stderr(config: Config) -> Config {
    if matches!(config.logger, Some(LogSink::Stdout)) {
        config.log_with(|line| {
            let _ = writeln!(std::io::stderr().lock(), "{line}");
        })
    } else {
        config
    }
}

/// Run `command` inside `dir`; the handle is dropped, and its policy applied,
/// before the exit code is returned
fn run_in_dir(mut dir: TempDir, command: &[OsString]) -> Result<ExitCode, Error> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| Error::internal("no command given"))?;

    let status = match Command::new(program)
        .args(args)
        .current_dir(dir.path())
        .env(PATH_ENV, dir.path())
        .status()
    {
        Ok(status) => status,
        Err(e) => {
            dir.mark_failed();
            return Err(Error::io_with_path(&e, program));
        }
    };

    if status.success() {
        return Ok(ExitCode::SUCCESS);
    }

    tracing::debug!(path = %dir.path().display(), %status, "command failed");
    dir.mark_failed();
    // Killed by a signal when there is no code
    let code = status.code().and_then(|c| u8::try_from(c).ok()).unwrap_or(1);
    Ok(ExitCode::from(code))
}
