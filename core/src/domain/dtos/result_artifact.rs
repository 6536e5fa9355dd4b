use bytes::Bytes;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// The zip archive returned by the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultArtifact {
    content: Bytes,
}

impl ResultArtifact {
    pub const EXTENSION: &'static str = "zip";

    pub fn new(content: impl Into<Bytes>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// The download name, built from the given local date and time.
    ///
    /// The day-month-year order follows the british locale. Separators are
    /// replaced so the name is valid on every file system.
    ///
    pub fn download_file_name<Tz>(&self, now: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        format!(
            "{}.{}",
            now.format("%d-%m-%Y_%H-%M-%S"),
            Self::EXTENSION
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_download_file_name() {
        let artifact = ResultArtifact::new(vec![0x50, 0x4b]);

        let now = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2026, 10, 16, 9, 5, 7)
            .unwrap();

        assert_eq!(
            artifact.download_file_name(&now),
            "16-10-2026_09-05-07.zip"
        );

        let now = Utc.with_ymd_and_hms(2024, 1, 2, 23, 59, 0).unwrap();

        assert_eq!(
            artifact.download_file_name(&now),
            "02-01-2024_23-59-00.zip"
        );
    }
}
