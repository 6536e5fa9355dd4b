mod load_settings;
mod read_uploaded_file;
mod write_artifact;

pub use load_settings::*;
pub use read_uploaded_file::*;
pub use write_artifact::*;

use tracing::debug;

/// Get the command line arguments.
#[tracing::instrument(name = "Runtime arguments")]
pub fn expose_runtime_arguments() {
    let args: Vec<_> = std::env::args().collect();
    debug!("{:?}", args.join(" "));
}
