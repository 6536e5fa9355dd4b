use crate::dtos::output_format::OutputFormat;

use anyhow::{Error, Result};
use clap::Args;
use modcmga_core::domain::dtos::{
    backend_request::BackendRequest, result_artifact::ResultArtifact,
};
use modcmga_ports_lib::{
    write_artifact, ClientConfig, ReqwestTransport, DEFAULT_TIMEOUT_SECS,
};
use std::path::PathBuf;

/// How to reach the backend and where to store what it returns.
#[derive(Args, Debug)]
pub(crate) struct BackendArguments {
    /// Base URL of the modularisation backend
    ///
    /// Endpoint paths (`apply`, `modularise`, ...) are appended to it.
    #[arg(long, env = "MODCMGA_BACKEND_URL")]
    pub(super) backend_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub(super) timeout_secs: u64,

    /// Directory the result archive is saved to
    #[arg(short, long, default_value = ".")]
    pub(super) output_directory: PathBuf,

    /// Build the request and print it instead of sending it
    #[arg(long, default_value = "false")]
    pub(super) dry_run: bool,

    /// Format of the dry run output
    #[arg(long, short = 'f', default_value = "json")]
    pub(super) out_format: OutputFormat,
}

impl BackendArguments {
    pub(super) fn transport(&self) -> Result<ReqwestTransport> {
        let backend_url = match &self.backend_url {
            Some(url) => url,
            None => {
                return Err(Error::msg(
                    "No backend URL given. Use `--backend-url` or set `MODCMGA_BACKEND_URL`.",
                ))
            }
        };

        let config = ClientConfig::new(backend_url, self.timeout_secs)?;

        Ok(ReqwestTransport::new(config)?)
    }

    pub(super) fn save(&self, artifact: &ResultArtifact) -> Result<()> {
        let path = write_artifact(&self.output_directory, artifact)?;
        println!("{}", path.display());

        Ok(())
    }

    /// Print the endpoint and parts of a request without sending it.
    pub(super) fn print(&self, request: &BackendRequest) -> Result<()> {
        let description = request.describe();

        match self.out_format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&description)?)
            }
            OutputFormat::Yaml => {
                println!("{}", serde_yaml::to_string(&description)?)
            }
        }

        Ok(())
    }
}
