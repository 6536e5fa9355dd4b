pub(crate) mod describe;
pub(crate) mod evaluate;
pub(crate) mod submit;

mod backend;
mod form_overrides;

use anyhow::Error;
use mycelium_base::utils::errors::MappedErrors;

/// Wrap a core error for the command line.
pub(crate) fn to_anyhow(err: MappedErrors) -> Error {
    Error::msg(err.to_string())
}
