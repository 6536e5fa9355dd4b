/// Indexes of the offspring and survivor selectors chosen in one mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectorIndex {
    pub offspring: usize,
    pub survivor: usize,
}

/// The active optimisation mode and the selector indexes chosen in it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptimisationMode {
    /// Weighted sum method: one aggregated objective.
    SingleObjective(SelectorIndex),

    /// Pareto optimisation over all selected objectives.
    MultiObjective(SelectorIndex),
}

impl OptimisationMode {
    pub fn is_single_objective(&self) -> bool {
        matches!(self, Self::SingleObjective(_))
    }

    pub fn indices(&self) -> SelectorIndex {
        match self {
            Self::SingleObjective(index) | Self::MultiObjective(index) => {
                *index
            }
        }
    }

    fn indices_mut(&mut self) -> &mut SelectorIndex {
        match self {
            Self::SingleObjective(index) | Self::MultiObjective(index) => index,
        }
    }
}

/// Tracks both modes so switching back restores the previous choices.
///
/// Only the active mode can be edited. The other mode's indexes are parked
/// untouched until the mode is switched again.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeSelection {
    active: OptimisationMode,
    parked: SelectorIndex,
}

impl ModeSelection {
    pub fn new(use_weighted_sum_method: bool) -> Self {
        let active = match use_weighted_sum_method {
            true => OptimisationMode::SingleObjective(SelectorIndex::default()),
            false => OptimisationMode::MultiObjective(SelectorIndex::default()),
        };

        Self {
            active,
            parked: SelectorIndex::default(),
        }
    }

    pub fn active(&self) -> OptimisationMode {
        self.active
    }

    pub fn is_use_weighted_sum_method(&self) -> bool {
        self.active.is_single_objective()
    }

    pub fn set_offspring(&mut self, index: usize) {
        self.active.indices_mut().offspring = index;
    }

    pub fn set_survivor(&mut self, index: usize) {
        self.active.indices_mut().survivor = index;
    }

    /// Point both modes back at their first selectors.
    pub fn reset(&mut self) {
        *self.active.indices_mut() = SelectorIndex::default();
        self.parked = SelectorIndex::default();
    }

    /// Switch to the requested mode, restoring its parked indexes.
    pub fn switch(&mut self, use_weighted_sum_method: bool) {
        if use_weighted_sum_method == self.is_use_weighted_sum_method() {
            return;
        }

        let restored = self.parked;
        self.parked = self.active.indices();

        self.active = match use_weighted_sum_method {
            true => OptimisationMode::SingleObjective(restored),
            false => OptimisationMode::MultiObjective(restored),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switching_back_restores_indices() {
        let mut selection = ModeSelection::new(true);
        selection.set_offspring(2);
        selection.set_survivor(1);

        selection.switch(false);
        assert_eq!(
            selection.active(),
            OptimisationMode::MultiObjective(SelectorIndex::default())
        );

        selection.set_offspring(3);
        selection.switch(true);

        assert_eq!(
            selection.active(),
            OptimisationMode::SingleObjective(SelectorIndex {
                offspring: 2,
                survivor: 1
            })
        );

        selection.switch(false);
        assert_eq!(selection.active().indices().offspring, 3);
        assert_eq!(selection.active().indices().survivor, 0);
    }

    #[test]
    fn test_reset_clears_both_modes() {
        let mut selection = ModeSelection::new(true);
        selection.set_offspring(1);
        selection.switch(false);
        selection.set_survivor(2);

        selection.reset();
        assert_eq!(selection.active().indices(), SelectorIndex::default());

        selection.switch(true);
        assert_eq!(
            selection.active(),
            OptimisationMode::SingleObjective(SelectorIndex::default())
        );
    }

    #[test]
    fn test_switch_to_same_mode_is_noop() {
        let mut selection = ModeSelection::new(false);
        selection.set_survivor(4);
        selection.switch(false);

        assert!(!selection.is_use_weighted_sum_method());
        assert_eq!(selection.active().indices().survivor, 4);
    }
}
