use anyhow::{Error, Result};
use modcmga_core::domain::dtos::app_settings::AppSettings;
use std::{fs::read_to_string, path::Path};
use tracing::debug;

/// Load the settings document from a JSON or YAML file.
///
/// The format is chosen by the file extension. Files with any other
/// extension are tried as JSON first and then as YAML.
///
pub fn load_settings(path: &Path) -> Result<AppSettings> {
    let content = read_to_string(path)?;

    let read_from_json = |content: &str| -> Result<AppSettings> {
        match serde_json::from_str::<AppSettings>(content) {
            Err(err) => Err(Error::from(err)),
            Ok(settings) => Ok(settings),
        }
    };

    let read_from_yaml = |content: &str| -> Result<AppSettings> {
        match serde_yaml::from_str::<AppSettings>(content) {
            Err(err) => Err(Error::from(err)),
            Ok(settings) => Ok(settings),
        }
    };

    let settings = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => read_from_json(&content)?,
        Some("yaml") | Some("yml") => read_from_yaml(&content)?,
        _ => {
            let json_err = match read_from_json(&content) {
                Ok(settings) => return Ok(settings),
                Err(err) => err,
            };

            let yaml_err = match read_from_yaml(&content) {
                Ok(settings) => return Ok(settings),
                Err(err) => err,
            };

            return Err(Error::msg(format!(
                "Error loading settings: {json_err} | {yaml_err}"
            )));
        }
    };

    debug!(
        path = %path.display(),
        genetic_algorithm_selections = settings.genetic_algorithm_selections.len(),
        meta_models = settings.meta_models.len(),
        "Settings loaded"
    );

    Ok(settings)
}
