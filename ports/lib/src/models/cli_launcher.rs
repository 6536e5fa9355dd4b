use super::LogFormat;

use clap::{Parser, Subcommand};

/// The arguments shared by every ModCMGA command line port.
///
/// The port specific commands are given by `T`; logging is configured from
/// the remaining flags before any command runs.
///
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliLauncher<T: Subcommand> {
    #[clap(subcommand)]
    pub opts: T,

    /// An `EnvFilter` directive (e.g. `info` or `modcmga_core=debug`)
    #[clap(long)]
    pub log_level: Option<String>,

    /// Write logs to this file, rotated every minute, instead of stderr
    #[clap(long)]
    pub log_file: Option<String>,

    #[clap(long, default_value = "ansi")]
    pub log_format: LogFormat,
}
