use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum LogFormat {
    /// ANSI format
    ///
    /// This format is human-readable and colorful.
    Ansi,

    /// JSON lines format
    ///
    /// One JSON object per event. This format is machine-readable and can be
    /// used for log analysis.
    Jsonl,
}
