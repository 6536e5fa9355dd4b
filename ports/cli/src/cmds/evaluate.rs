use super::{backend::BackendArguments, form_overrides::FormOverrides, to_anyhow};

use anyhow::Result;
use clap::Parser;
use modcmga_core::{
    domain::dtos::objective::ObjectiveData,
    use_cases::{build_evaluation_request, submit_evaluation},
};
use modcmga_ports_lib::read_uploaded_file;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub(crate) struct Arguments {
    /// Path to the knowledge graph (GraphML) the result was computed from
    #[arg(short, long)]
    pub(super) knowledge_graph: PathBuf,

    /// Path to the modularisation result to evaluate
    #[arg(short = 'r', long)]
    pub(super) modularisation_result: PathBuf,

    #[command(flatten)]
    pub(super) form: FormOverrides,

    #[command(flatten)]
    pub(super) backend: BackendArguments,
}

pub(crate) async fn evaluate_cmd(args: Arguments) -> Result<()> {
    let form = args.form.build_form()?;

    let knowledge_graph = read_uploaded_file(&args.knowledge_graph)?;
    let modularisation_result =
        read_uploaded_file(&args.modularisation_result)?;

    if args.backend.dry_run {
        let objective_data = ObjectiveData::from_selected(
            form.number_of_elements_per_module(),
            form.is_use_weighted_sum_method(),
            form.objectives(),
        );

        let request = build_evaluation_request(
            knowledge_graph,
            modularisation_result,
            &objective_data,
        )
        .map_err(to_anyhow)?;

        return args.backend.print(&request);
    }

    let transport = args.backend.transport()?;
    let artifact = submit_evaluation(
        &form,
        knowledge_graph,
        modularisation_result,
        &transport,
    )
    .await
    .map_err(to_anyhow)?;

    args.backend.save(&artifact)
}
