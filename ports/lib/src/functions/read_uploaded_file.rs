use anyhow::{Error, Result};
use modcmga_core::domain::dtos::uploaded_file::UploadedFile;
use std::{fs::read, path::Path};

/// Read a file from disk, keeping its base name as the upload name.
pub fn read_uploaded_file(path: &Path) -> Result<UploadedFile> {
    let file_name = match path.file_name().and_then(|name| name.to_str()) {
        Some(name) => name.to_string(),
        None => {
            return Err(Error::msg(format!(
                "Unable to get a file name from `{}`",
                path.display()
            )))
        }
    };

    Ok(UploadedFile::new(file_name, read(path)?))
}
