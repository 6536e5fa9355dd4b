use serde::{Deserialize, Serialize};

/// Formats a dry run request description can be printed in.
#[derive(Clone, Debug, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub(crate) enum OutputFormat {
    /// JSON format
    Json,

    /// YAML format
    Yaml,
}

/// Formats the settings description can be printed in.
#[derive(Clone, Debug, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub(crate) enum SettingsDescriptionOutputFormat {
    /// JSON format
    Json,

    /// YAML format
    Yaml,

    /// Tab separated `field`, `key` and `value` columns
    Tsv,
}
