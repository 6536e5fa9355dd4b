use super::multipart::{MultipartBody, PartDescription};

use serde::Serialize;
use std::fmt::Display;

/// The kind of model file, decided by its extension alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileCategory {
    /// A knowledge graph already exported as GraphML.
    GraphDirect,

    /// A tool export (`xml`, `archimate` or `uml`) the backend converts first.
    MetaModel,

    /// Any other extension, or no extension at all.
    NotRecognized(Option<String>),
}

impl FileCategory {
    /// Classify a model file by the substring after the last `.` of its
    /// name.
    pub fn from_extension(extension: Option<&str>) -> Self {
        match extension {
            Some("graphml") => Self::GraphDirect,
            Some("xml") | Some("archimate") | Some("uml") => Self::MetaModel,
            other => Self::NotRecognized(other.map(str::to_owned)),
        }
    }

    /// The endpoint serving this category, if any.
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            Self::GraphDirect => Some(Endpoint::Apply),
            Self::MetaModel => Some(Endpoint::Modularise),
            Self::NotRecognized(_) => None,
        }
    }

    /// The multipart field name the model file is attached under.
    pub fn file_field_name(&self) -> Option<&'static str> {
        match self {
            Self::GraphDirect => Some("graphmlFile"),
            Self::MetaModel => Some("metaModelFile"),
            Self::NotRecognized(_) => None,
        }
    }
}

/// Backend paths, appended to the configured base URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Endpoint {
    #[serde(rename = "apply")]
    Apply,

    #[serde(rename = "modularise")]
    Modularise,

    #[serde(rename = "evaluateModularisationResult")]
    EvaluateModularisationResult,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Apply => "apply",
            Self::Modularise => "modularise",
            Self::EvaluateModularisationResult => {
                "evaluateModularisationResult"
            }
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// One outbound POST request: a path and a multipart body.
///
/// The backend answers with a zip archive.
///
#[derive(Clone, Debug, PartialEq)]
pub struct BackendRequest {
    pub endpoint: Endpoint,
    pub body: MultipartBody,
}

impl BackendRequest {
    pub const ACCEPT: &'static str = "application/zip";

    pub fn new(endpoint: Endpoint, body: MultipartBody) -> Self {
        Self { endpoint, body }
    }

    pub fn describe(&self) -> BackendRequestDescription {
        BackendRequestDescription {
            endpoint: self.endpoint,
            parts: self.body.describe(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendRequestDescription {
    pub endpoint: Endpoint,
    pub parts: Vec<PartDescription>,
}
