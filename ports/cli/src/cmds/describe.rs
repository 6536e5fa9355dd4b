use crate::dtos::output_format::SettingsDescriptionOutputFormat;

use anyhow::Result;
use clap::Parser;
use modcmga_core::domain::dtos::app_settings::AppSettings;
use modcmga_ports_lib::load_settings;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub(crate) struct Arguments {
    /// Path to the settings document
    ///
    /// The file should be in JSON or YAML format.
    #[arg(short, long)]
    pub(super) settings_file: PathBuf,

    /// Output format
    #[arg(long, short = 'f', default_value = "tsv")]
    pub(super) out_format: SettingsDescriptionOutputFormat,
}

/// One selectable option of the settings document.
///
/// `key` locates the option, e.g. `0/1` for the second crossover of the first
/// genetic algorithm selection. Its last segment is the index taken by the
/// `submit` overrides.
///
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OptionRow {
    pub(crate) field: String,
    pub(crate) key: String,
    pub(crate) value: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) help: Option<String>,
}

/// The settings document's tooltip key for a request field.
fn tooltip_key(field: &str) -> &str {
    match field {
        "offspringSelector" => "offspringSelection",
        "survivorSelector" => "survivorSelection",
        "crossoverType" => "crossoverSelection",
        "mutationType" => "mutationSelection",
        "objectives" => "objectiveTable",
        "edgeWeights" => "edgeWeightTable",
        _ => field,
    }
}

fn row(
    settings: &AppSettings,
    field: &str,
    key: String,
    value: &str,
) -> OptionRow {
    OptionRow {
        field: field.to_string(),
        key,
        value: value.to_string(),
        help: settings.tooltip(tooltip_key(field)).map(str::to_string),
    }
}

fn rows_of<'a>(
    settings: &AppSettings,
    field: &str,
    prefix: String,
    values: impl IntoIterator<Item = &'a String>,
) -> Vec<OptionRow> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            row(settings, field, format!("{prefix}/{index}"), value)
        })
        .collect()
}

/// Flatten the settings document into the options a user can choose from.
pub(crate) fn describe_settings(settings: &AppSettings) -> Vec<OptionRow> {
    let mut rows = vec![];

    for (index, selection) in
        settings.genetic_algorithm_selections.iter().enumerate()
    {
        rows.push(row(
            settings,
            "chromosomeEncoding",
            index.to_string(),
            &selection.chromosome_encoding,
        ));

        for (mode, is_single_objective) in [("single", true), ("multi", false)]
        {
            rows.extend(rows_of(
                settings,
                "offspringSelector",
                format!("{index}/{mode}"),
                selection.offspring_selectors(is_single_objective),
            ));

            rows.extend(rows_of(
                settings,
                "survivorSelector",
                format!("{index}/{mode}"),
                selection.survivor_selectors(is_single_objective),
            ));
        }

        rows.extend(rows_of(
            settings,
            "crossoverType",
            index.to_string(),
            &selection.crossovers,
        ));

        rows.extend(rows_of(
            settings,
            "mutationType",
            index.to_string(),
            &selection.mutations,
        ));
    }

    for (index, meta_model) in settings.meta_models.iter().enumerate() {
        rows.push(row(
            settings,
            "metaModelType",
            index.to_string(),
            &meta_model.label,
        ));

        rows.extend(rows_of(
            settings,
            "conceptualModelType",
            index.to_string(),
            &meta_model.conceptual_models,
        ));
    }

    for (index, objective) in settings.objectives.iter().enumerate() {
        rows.push(row(
            settings,
            "objectives",
            index.to_string(),
            &objective.objective_type,
        ));
    }

    for (index, edge_weight) in settings.edge_weights.iter().enumerate() {
        rows.push(row(
            settings,
            "edgeWeights",
            index.to_string(),
            &format!("{}={}", edge_weight.name, edge_weight.weight),
        ));
    }

    rows
}

pub(crate) fn describe_settings_cmd(args: Arguments) -> Result<()> {
    let settings = load_settings(&args.settings_file)?;
    let rows = describe_settings(&settings);

    match args.out_format {
        SettingsDescriptionOutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        SettingsDescriptionOutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&rows)?);
        }
        SettingsDescriptionOutputFormat::Tsv => {
            for row in rows {
                println!(
                    "{}\t{}\t{}\t{}",
                    row.field,
                    row.key,
                    row.value,
                    row.help.unwrap_or_default()
                );
            }
        }
    }

    Ok(())
}
