use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The tool family a conceptual model file is expressed in.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum MetaModelType {
    /// Papyrus UML models (`.uml`)
    PapyrusUml,

    /// Archi models (`.archimate`)
    Archi,

    /// ADOxx models (`.xml`)
    ///
    /// ADOxx exports require a companion DTD schema file.
    Adoxx,
}

impl MetaModelType {
    /// Resolve the human readable label used by the settings document.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Papyrus UML" => Some(Self::PapyrusUml),
            "Archi" => Some(Self::Archi),
            "ADOxx" => Some(Self::Adoxx),
            _ => None,
        }
    }

    pub fn requires_schema_file(&self) -> bool {
        matches!(self, Self::Adoxx)
    }
}

impl Display for MetaModelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PapyrusUml => write!(f, "PAPYRUSUML"),
            Self::Archi => write!(f, "ARCHI"),
            Self::Adoxx => write!(f, "ADOXX"),
        }
    }
}

/// The modelling notation of the conceptual model.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConceptualModelType {
    Uml,
    Archimate,
    Epc,
    Er,
    Owl,
}

impl ConceptualModelType {
    /// Resolve the human readable label used by the settings document.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "UML" => Some(Self::Uml),
            "Archimate" => Some(Self::Archimate),
            "EPC" => Some(Self::Epc),
            "ER" => Some(Self::Er),
            "OWL" => Some(Self::Owl),
            _ => None,
        }
    }
}

impl Display for ConceptualModelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uml => write!(f, "UML"),
            Self::Archimate => write!(f, "ARCHIMATE"),
            Self::Epc => write!(f, "EPC"),
            Self::Er => write!(f, "ER"),
            Self::Owl => write!(f, "OWL"),
        }
    }
}

/// A meta model entry of the settings document.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetaModel {
    /// The tool family label (e.g. `Papyrus UML`).
    pub label: String,

    /// Labels of the conceptual model kinds this tool can express.
    pub conceptual_models: Vec<String>,
}

/// The resolved pair of meta model and conceptual model kinds.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ModelReference {
    pub meta_model_type: MetaModelType,
    pub conceptual_model_type: ConceptualModelType,
}

impl ModelReference {
    pub fn requires_schema_file(&self) -> bool {
        self.meta_model_type.requires_schema_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_resolve_to_wire_values() {
        assert_eq!(
            MetaModelType::from_label("Papyrus UML").unwrap().to_string(),
            "PAPYRUSUML"
        );
        assert_eq!(
            ConceptualModelType::from_label("Archimate").unwrap().to_string(),
            "ARCHIMATE"
        );
        assert_eq!(MetaModelType::from_label("Visio"), None);
    }

    #[test]
    fn test_display_matches_serde() {
        for kind in [
            MetaModelType::PapyrusUml,
            MetaModelType::Archi,
            MetaModelType::Adoxx,
        ] {
            assert_eq!(
                serde_json::to_string(&kind).unwrap(),
                format!("\"{kind}\"")
            );
        }

        for kind in [
            ConceptualModelType::Uml,
            ConceptualModelType::Archimate,
            ConceptualModelType::Epc,
            ConceptualModelType::Er,
            ConceptualModelType::Owl,
        ] {
            assert_eq!(
                serde_json::to_string(&kind).unwrap(),
                format!("\"{kind}\"")
            );
        }
    }

    #[test]
    fn test_only_adoxx_requires_schema() {
        assert!(MetaModelType::Adoxx.requires_schema_file());
        assert!(!MetaModelType::Archi.requires_schema_file());
        assert!(!MetaModelType::PapyrusUml.requires_schema_file());
    }
}
