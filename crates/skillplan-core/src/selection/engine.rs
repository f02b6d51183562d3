//! The selection engine.
//!
//! `SelectionEngine` owns one build's `Selection` and keeps two invariants
//! across every operation:
//!
//! - closure: every selected skill's prerequisites are selected too;
//! - budget: total point cost never exceeds the cap a `select` was given.
//!
//! Every mutation either lands in a valid state or is rejected without
//! touching the selection. The catalog is shared via `Arc`, so independent
//! builds are just independent engines.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use skillplan_types::error::SelectionError;

use super::Selection;
use super::aggregate::total_points;
use crate::catalog::Catalog;

/// What a toggle gesture did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggled {
    /// The skill was added, along with these ids (sorted, includes the skill).
    Selected(Vec<String>),
    /// The skill was removed, along with these dependents (sorted, includes the skill).
    Deselected(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct SelectionEngine {
    catalog: Arc<Catalog>,
    selection: Selection,
}

impl SelectionEngine {
    /// Start an empty build over `catalog`.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            selection: Selection::new(),
        }
    }

    /// Rebuild an engine by selecting each id in order under `cap`.
    ///
    /// Stops at the first id that is unknown or does not fit.
    pub fn from_selection<I, S>(catalog: Arc<Catalog>, ids: I, cap: u32) -> Result<Self, SelectionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut engine = Self::new(catalog);
        for id in ids {
            engine.select(id.as_ref(), cap)?;
        }
        Ok(engine)
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// Total point cost of the current selection.
    pub fn total_points(&self) -> u32 {
        total_points(&self.catalog, &self.selection)
    }

    /// True when `id` is selected, or every one of its direct prerequisites
    /// is. Unknown ids are never selectable.
    pub fn can_select(&self, id: &str) -> bool {
        if self.selection.contains(id) {
            return true;
        }
        match self.catalog.get(id) {
            Some(skill) => skill
                .prerequisites
                .iter()
                .all(|r| self.selection.contains(r)),
            None => false,
        }
    }

    /// Total cost the selection would have after selecting `id` with every
    /// unselected prerequisite. Does not change state.
    pub fn projected_cost(&self, id: &str) -> u32 {
        let added = self.missing_closure(id);
        self.total_points().saturating_add(self.cost_of(&added))
    }

    /// True when `id` is selected, or selecting it would stay within `cap`.
    /// Unknown ids are never affordable.
    pub fn can_afford(&self, id: &str, cap: u32) -> bool {
        if self.selection.contains(id) {
            return true;
        }
        self.catalog.contains(id) && self.projected_cost(id) <= cap
    }

    /// Select `id` and its whole unselected prerequisite closure, atomically.
    ///
    /// Returns the newly added ids, sorted; empty when `id` was already
    /// selected. Fails with `BudgetExceeded` (state unchanged) when the
    /// projected total would exceed `cap`.
    pub fn select(&mut self, id: &str, cap: u32) -> Result<Vec<String>, SelectionError> {
        if self.selection.contains(id) {
            return Ok(Vec::new());
        }
        if !self.catalog.contains(id) {
            return Err(SelectionError::UnknownSkill(id.to_string()));
        }

        let mut added = self.missing_closure(id);
        let projected = self.total_points().saturating_add(self.cost_of(&added));
        if projected > cap {
            tracing::info!(skill = id, projected, cap, "selection rejected: over point cap");
            return Err(SelectionError::BudgetExceeded {
                id: id.to_string(),
                projected,
                cap,
            });
        }

        for skill in &added {
            self.selection.insert(skill.clone());
        }
        added.sort();

        tracing::debug!(skill = id, added = added.len(), total = projected, "skill selected");
        Ok(added)
    }

    /// Remove `id` and every selected skill that transitively depends on it.
    ///
    /// Returns the removed ids, sorted; empty when `id` was not selected.
    pub fn deselect(&mut self, id: &str) -> Vec<String> {
        if !self.selection.remove(id) {
            return Vec::new();
        }

        let mut removed = vec![id.to_string()];
        let mut queue = VecDeque::from([id.to_string()]);

        // Only dependents of removed skills can lose a prerequisite.
        while let Some(gone) = queue.pop_front() {
            for dep in self.catalog.dependents(&gone) {
                if !self.selection.contains(dep) {
                    continue;
                }
                let satisfied = self
                    .catalog
                    .prerequisites(dep)
                    .iter()
                    .all(|r| self.selection.contains(r));
                if !satisfied {
                    self.selection.remove(dep);
                    removed.push(dep.clone());
                    queue.push_back(dep.clone());
                }
            }
        }

        removed.sort();
        tracing::debug!(
            skill = id,
            removed = removed.len(),
            total = self.total_points(),
            "skill deselected"
        );
        removed
    }

    /// The click gesture: deselect when selected, otherwise select.
    pub fn toggle(&mut self, id: &str, cap: u32) -> Result<Toggled, SelectionError> {
        if self.selection.contains(id) {
            Ok(Toggled::Deselected(self.deselect(id)))
        } else {
            self.select(id, cap).map(Toggled::Selected)
        }
    }

    /// Empty the selection.
    pub fn reset(&mut self) {
        self.selection.clear();
        tracing::debug!(total = 0u32, "selection reset");
    }

    /// Unselected members of `id`'s prerequisite closure, `id` included, in
    /// depth-first visit order. Empty for unknown or selected ids.
    fn missing_closure(&self, id: &str) -> Vec<String> {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut order = Vec::new();
        if !self.catalog.contains(id) {
            return order;
        }

        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if self.selection.contains(current) || !visited.insert(current) {
                continue;
            }
            order.push(current.to_string());
            for req in self.catalog.prerequisites(current) {
                if !self.selection.contains(req) && !visited.contains(req.as_str()) {
                    stack.push(req.as_str());
                }
            }
        }

        order
    }

    fn cost_of(&self, ids: &[String]) -> u32 {
        ids.iter()
            .filter_map(|id| self.catalog.get(id))
            .fold(0u32, |acc, s| acc.saturating_add(s.point_cost))
    }
}
