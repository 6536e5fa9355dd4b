use serde::{Deserialize, Serialize};

/// An optimisation objective as edited in the objectives table.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Objective {
    /// The objective name understood by the backend (e.g. `COUPLING`).
    pub objective_type: String,

    /// Whether the objective takes part in the fitness function.
    pub is_selected: bool,

    /// The weight used by the weighted sum method.
    pub objective_weight: f64,
}

impl Objective {
    pub fn to_specification(&self) -> ObjectiveSpecification {
        ObjectiveSpecification {
            objective_type: self.objective_type.to_owned(),
            selected: self.is_selected,
            weight: self.objective_weight,
        }
    }
}

/// The fixed, ordered objectives table.
///
/// At least one objective stays selected: deselecting the last selected
/// objective re-selects it.
///
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Objectives(Vec<Objective>);

impl Objectives {
    pub fn new(objectives: Vec<Objective>) -> Self {
        Self(objectives)
    }

    pub fn get_objectives(&self) -> &[Objective] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn selected(&self) -> impl Iterator<Item = &Objective> {
        self.0.iter().filter(|objective| objective.is_selected)
    }

    /// Change the selection state of the objective at `index`.
    ///
    /// Returns the state the objective ends up with. Out of range indexes are
    /// ignored and return `false`.
    ///
    pub fn set_selected(&mut self, index: usize, selected: bool) -> bool {
        let objective = match self.0.get_mut(index) {
            None => return false,
            Some(objective) => objective,
        };

        objective.is_selected = selected;

        if self.selected().count() == 0 {
            self.0[index].is_selected = true;
        }

        self.0[index].is_selected
    }

    /// Change the weight of the objective at `index`.
    pub fn set_weight(&mut self, index: usize, weight: f64) -> bool {
        match self.0.get_mut(index) {
            None => false,
            Some(objective) => {
                objective.objective_weight = weight;
                true
            }
        }
    }
}

impl From<Vec<Objective>> for Objectives {
    fn from(value: Vec<Objective>) -> Self {
        Self::new(value)
    }
}

/// The objective representation expected by the backend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ObjectiveSpecification {
    pub objective_type: String,
    pub selected: bool,
    pub weight: f64,
}

/// The objective related block sent as a single JSON field.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ObjectiveData {
    /// The number of vertices a module should have.
    pub number_of_elements_per_module: u32,

    /// Whether the weighted sum (single objective) method is applied.
    pub is_use_weighted_sum_method: bool,

    /// The selected objectives used by the fitness function.
    pub objective_specifications: Vec<ObjectiveSpecification>,
}

impl ObjectiveData {
    /// Build the block from the selected objectives only.
    pub fn from_selected(
        number_of_elements_per_module: u32,
        is_use_weighted_sum_method: bool,
        objectives: &Objectives,
    ) -> Self {
        Self {
            number_of_elements_per_module,
            is_use_weighted_sum_method,
            objective_specifications: objectives
                .selected()
                .map(Objective::to_specification)
                .collect(),
        }
    }
}
