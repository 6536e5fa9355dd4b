use serde::Serialize;
use std::fmt::Display;

#[derive(Clone, Debug, Serialize)]
#[serde(untagged, rename_all = "UPPERCASE")]
pub(crate) enum TelemetryCode {
    // ? -----------------------------------------------------------------------
    // ? Reserved codes to the aggregate_snapshot use case
    //
    /// Snapshot aggregation started
    ///
    UCAGGR0001,
    //
    /// Snapshot aggregation ended
    ///
    UCAGGR0002,
    // ? -----------------------------------------------------------------------

    // ? -----------------------------------------------------------------------
    // ? Reserved codes to the build_modularisation_request use case
    //
    /// The model file was classified
    ///
    UCBUILD0001,
    //
    /// The model file could not be classified
    ///
    UCBUILD0002,
    //
    /// The schema file was attached
    ///
    UCBUILD0003,
    //
    /// The request body was built
    ///
    UCBUILD0004,
    //
    /// The meta model expects a schema file but none was provided
    ///
    UCBUILD0005,
    // ? -----------------------------------------------------------------------

    // ? -----------------------------------------------------------------------
    // ? Reserved codes to the submit_modularisation use case
    //
    /// Submission started
    ///
    UCSUBMIT0001,
    //
    /// The backend returned the result artifact
    ///
    UCSUBMIT0002,
    //
    /// The transport failed
    ///
    UCSUBMIT0003,
    // ? -----------------------------------------------------------------------

    // ? -----------------------------------------------------------------------
    // ? Reserved codes to the evaluate_modularisation use case
    //
    /// Evaluation request built
    ///
    UCEVAL0001,
    //
    /// Evaluation submission started
    ///
    UCEVAL0002,
    // ? -----------------------------------------------------------------------
}

impl Display for TelemetryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
