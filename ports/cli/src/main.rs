mod cmds;
mod dtos;

use anyhow::{Error, Result};
use clap::{Parser, Subcommand};
use modcmga_ports_lib::{expose_runtime_arguments, CliLauncher, LogFormat};
use std::{path::PathBuf, str::FromStr};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Subcommand, Debug)]
#[command(author, version, about, long_about = None)]
enum Opts {
    /// Send a model file to the backend and download the modularisation
    Submit(cmds::submit::Arguments),

    /// Evaluate an existing modularisation result
    Evaluate(cmds::evaluate::Arguments),

    /// Show the options a settings document offers
    Describe(cmds::describe::Arguments),
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliLauncher::<Opts>::parse();

    // ? -----------------------------------------------------------------------
    // ? Configure logger
    // ? -----------------------------------------------------------------------

    let log_level = args.log_level.unwrap_or("info".to_string());

    let (non_blocking, _guard) = match args.log_file {
        //
        // If no log file is provided, log to stderr
        //
        None => tracing_appender::non_blocking(std::io::stderr()),
        //
        // If a log file is provided, log to the file
        //
        Some(file) => {
            let log_file = PathBuf::from(file);

            let (directory, file_name) =
                match (log_file.parent(), log_file.file_name()) {
                    (Some(directory), Some(file_name)) => {
                        (directory.to_owned(), file_name.to_owned())
                    }
                    _ => {
                        return Err(Error::msg(format!(
                            "Invalid log file path: {}",
                            log_file.display()
                        )))
                    }
                };

            let file_appender =
                tracing_appender::rolling::minutely(directory, file_name);

            tracing_appender::non_blocking(file_appender)
        }
    };

    let tracing_config = tracing_subscriber::fmt()
        .event_format(fmt::format().with_level(true).compact())
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(non_blocking)
        .with_env_filter(EnvFilter::from_str(log_level.as_str())?);

    match args.log_format {
        LogFormat::Ansi => tracing_config.pretty().init(),
        LogFormat::Jsonl => tracing_config.json().init(),
    };

    // ? -----------------------------------------------------------------------
    // ? Get command line arguments
    // ? -----------------------------------------------------------------------

    expose_runtime_arguments();

    // ? -----------------------------------------------------------------------
    // ? Dispatch the command
    // ? -----------------------------------------------------------------------

    match args.opts {
        Opts::Submit(submit_args) => {
            cmds::submit::submit_cmd(submit_args).await?
        }
        Opts::Evaluate(evaluate_args) => {
            cmds::evaluate::evaluate_cmd(evaluate_args).await?
        }
        Opts::Describe(describe_args) => {
            cmds::describe::describe_settings_cmd(describe_args)?
        }
    };

    Ok(())
}
