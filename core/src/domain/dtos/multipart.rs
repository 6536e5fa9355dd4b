use super::uploaded_file::UploadedFile;

use serde::Serialize;

/// The value carried by one part of a multipart body.
#[derive(Clone, Debug, PartialEq)]
pub enum PartValue {
    /// A text field, already string-converted.
    Text(String),

    /// A binary part keeping the original file name.
    File(UploadedFile),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormPart {
    pub name: String,
    pub value: PartValue,
}

/// A transport independent `multipart/form-data` body.
///
/// Parts keep insertion order. Encoding the body on the wire is the job of
/// the transport collaborator.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultipartBody {
    parts: Vec<FormPart>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl ToString) -> Self {
        self.parts.push(FormPart {
            name: name.to_owned(),
            value: PartValue::Text(value.to_string()),
        });

        self
    }

    pub fn file(mut self, name: &str, file: UploadedFile) -> Self {
        self.parts.push(FormPart {
            name: name.to_owned(),
            value: PartValue::File(file),
        });

        self
    }

    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<FormPart> {
        self.parts
    }

    pub fn get(&self, name: &str) -> Option<&PartValue> {
        self.parts
            .iter()
            .find(|part| part.name == name)
            .map(|part| &part.value)
    }

    pub fn get_text(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(PartValue::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn get_file(&self, name: &str) -> Option<&UploadedFile> {
        match self.get(name) {
            Some(PartValue::File(file)) => Some(file),
            _ => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// A printable view of the body, with file parts reduced to their name
    /// and size.
    pub fn describe(&self) -> Vec<PartDescription> {
        self.parts
            .iter()
            .map(|part| match &part.value {
                PartValue::Text(value) => PartDescription::Text {
                    name: part.name.to_owned(),
                    value: value.to_owned(),
                },
                PartValue::File(file) => PartDescription::File {
                    name: part.name.to_owned(),
                    file_name: file.file_name().to_owned(),
                    size: file.content().len(),
                },
            })
            .collect()
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PartDescription {
    #[serde(rename_all = "camelCase")]
    Text { name: String, value: String },

    #[serde(rename_all = "camelCase")]
    File {
        name: String,
        file_name: String,
        size: usize,
    },
}
