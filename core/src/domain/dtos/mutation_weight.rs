use serde::{Deserialize, Serialize};

/// Emphasis given to each mutation operation of linear linkage encodings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MutationWeight {
    pub split_modules_weight: f64,
    pub combine_modules_weight: f64,
    pub move_elements_between_modules_weight: f64,
}
