//! Command line interface definition

use clap::{Args, Parser, Subcommand};
use scopedir_config::Cleanup;
use std::ffi::OsString;
use std::path::PathBuf;

/// scopedir - scoped temporary directories for scripts and test runs
#[derive(Parser, Debug)]
#[command(name = "scopedir")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Run commands inside scoped temporary directories")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Options shared by every command
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Directory under which the temporary directory is created
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Leading part of the generated directory name
    #[arg(long, global = true)]
    pub prefix: Option<String>,

    /// Cleanup policy: always, on-success or never
    #[arg(long, global = true, value_name = "POLICY")]
    pub cleanup: Option<Cleanup>,

    /// Use alternate config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print directory events to stdout
    #[arg(long, global = true)]
    pub log: bool,

    /// Enable debug tracing on stderr
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a command with a fresh temporary directory as working directory
    Run {
        /// Command and its arguments
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<OsString>,
    },

    /// Create a directory, keep it and print its path
    Create {
        /// Print `{"path": ...}` instead of the bare path
        #[arg(long)]
        json: bool,
    },
}
