use anyhow::Result;
use chrono::Local;
use modcmga_core::domain::dtos::result_artifact::ResultArtifact;
use std::{
    fs::{create_dir_all, OpenOptions},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// `16-10-2026_09-05-07.zip`, then `16-10-2026_09-05-07_1.zip` and so on.
fn numbered_file_name(file_name: &str, attempt: usize) -> String {
    if attempt == 0 {
        return file_name.to_string();
    }

    let path = Path::new(file_name);

    match (
        path.file_stem().and_then(|stem| stem.to_str()),
        path.extension().and_then(|extension| extension.to_str()),
    ) {
        (Some(stem), Some(extension)) => {
            format!("{stem}_{attempt}.{extension}")
        }
        _ => format!("{file_name}_{attempt}"),
    }
}

/// Save the result archive under the given directory.
///
/// The file is named after the local date and time of the download. The
/// directory is created when missing. An existing archive is never
/// overwritten: a numeric suffix is added until the name is free.
///
pub fn write_artifact(
    directory: &Path,
    artifact: &ResultArtifact,
) -> Result<PathBuf> {
    create_dir_all(directory)?;

    let file_name = artifact.download_file_name(&Local::now());
    let mut attempt = 0;

    let (path, mut file) = loop {
        let path = directory.join(numbered_file_name(&file_name, attempt));

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => break (path, file),
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                debug!(path = %path.display(), "Archive name already taken");
                attempt += 1;
            }
            Err(err) => return Err(err.into()),
        }
    };

    file.write_all(artifact.content())?;

    info!(
        path = %path.display(),
        size = artifact.len(),
        "Result archive saved"
    );

    Ok(path)
}
