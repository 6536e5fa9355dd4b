use serde::{Deserialize, Serialize};

/// The weight given to one edge type of the knowledge graph.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EdgeWeight {
    pub name: String,
    pub weight: i32,
}

impl EdgeWeight {
    pub fn new(name: String, weight: i32) -> Self {
        Self { name, weight }
    }
}

/// The editable, ordered edge weight table.
///
/// The table never becomes empty: deleting the last remaining entry is
/// silently ignored.
///
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct EdgeWeights(Vec<EdgeWeight>);

impl EdgeWeights {
    pub fn new(edge_weights: Vec<EdgeWeight>) -> Self {
        Self(edge_weights)
    }

    pub fn get_weights(&self) -> &[EdgeWeight] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a new edge weight.
    ///
    /// Entries without a name are ignored. Returns `true` if the entry was
    /// appended.
    ///
    pub fn add(&mut self, name: &str, weight: i32) -> bool {
        if name.is_empty() {
            return false;
        }

        self.0.push(EdgeWeight::new(name.to_owned(), weight));
        true
    }

    /// Remove the edge weight at `index`.
    ///
    /// Returns `false` and leaves the table untouched if only one entry
    /// remains or the index is out of range.
    ///
    pub fn delete(&mut self, index: usize) -> bool {
        if self.0.len() <= 1 || index >= self.0.len() {
            return false;
        }

        self.0.remove(index);
        true
    }
}

impl From<Vec<EdgeWeight>> for EdgeWeights {
    fn from(value: Vec<EdgeWeight>) -> Self {
        Self::new(value)
    }
}
