/// This module contains the use case to snapshot the form state into the
/// parameters of one request.
mod aggregate_snapshot;

/// This module contains the use case to classify the model file and encode
/// a snapshot as a multipart request.
mod build_modularisation_request;

/// This module contains the use case to encode an evaluation request of an
/// existing modularisation result.
mod build_evaluation_request;

/// This module contains the use cases that hand a built request to the
/// backend transport.
mod submit_request;

pub use aggregate_snapshot::*;
pub use build_evaluation_request::*;
pub use build_modularisation_request::*;
pub use submit_request::*;
