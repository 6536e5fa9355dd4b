use super::{backend::BackendArguments, form_overrides::FormOverrides, to_anyhow};

use anyhow::Result;
use clap::Parser;
use modcmga_core::use_cases::{
    aggregate_snapshot, build_modularisation_request, submit_modularisation,
};
use modcmga_ports_lib::read_uploaded_file;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
pub(crate) struct Arguments {
    /// Path to the model file
    ///
    /// `graphml` files are sent as they are. `xml`, `archimate` and `uml`
    /// exports are converted by the backend first.
    #[arg(short, long)]
    pub(super) model_file: PathBuf,

    /// Path to the DTD schema exported together with ADOxx models
    #[arg(long)]
    pub(super) schema_file: Option<PathBuf>,

    #[command(flatten)]
    pub(super) form: FormOverrides,

    #[command(flatten)]
    pub(super) backend: BackendArguments,
}

pub(crate) async fn submit_cmd(args: Arguments) -> Result<()> {
    let mut form = args.form.build_form()?;

    form.set_model_file(read_uploaded_file(&args.model_file)?);

    if let Some(path) = &args.schema_file {
        form.set_schema_file(read_uploaded_file(path)?);
    }

    info!(
        meta_model = form.meta_model_label(),
        conceptual_model = form.conceptual_model_label(),
        schema_file_required = form.is_schema_file_required(),
        "Model reference"
    );

    if args.backend.dry_run {
        let request = build_modularisation_request(&aggregate_snapshot(&form))
            .map_err(to_anyhow)?;

        return args.backend.print(&request);
    }

    let transport = args.backend.transport()?;
    let artifact = submit_modularisation(&form, &transport)
        .await
        .map_err(to_anyhow)?;

    args.backend.save(&artifact)
}
