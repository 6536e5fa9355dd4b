use bytes::Bytes;
use std::fmt::Debug;

/// A file chosen by the user, kept in memory until the request is sent.
#[derive(Clone, PartialEq)]
pub struct UploadedFile {
    file_name: String,
    content: Bytes,
}

impl UploadedFile {
    pub fn new(file_name: String, content: impl Into<Bytes>) -> Self {
        Self {
            file_name,
            content: content.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }

    /// The substring after the last `.` of the file name.
    ///
    /// Returns `None` when the file name has no dot.
    ///
    pub fn extension(&self) -> Option<&str> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, extension)| extension)
    }
}

impl Debug for UploadedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadedFile")
            .field("file_name", &self.file_name)
            .field("size", &self.content.len())
            .finish()
    }
}
