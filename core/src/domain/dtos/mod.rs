pub mod app_settings;
pub mod backend_request;
pub mod edge_weight;
pub mod genetic_algorithm_parameter;
pub mod genetic_algorithm_selection;
pub mod model_reference;
pub mod modularisation_form;
pub mod multipart;
pub mod mutation_weight;
pub mod objective;
pub mod optimisation_mode;
pub mod request_snapshot;
pub mod result_artifact;
pub(crate) mod telemetry_code;
pub mod uploaded_file;
