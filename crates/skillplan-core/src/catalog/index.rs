//! Reverse prerequisite index.
//!
//! Maps each skill to the skills that list it as a direct prerequisite, so
//! cascading deselection only has to visit the affected subgraph.

use std::collections::HashMap;

use skillplan_types::skill::Skill;

#[derive(Debug, Clone, Default)]
pub struct DependencyIndex {
    dependents: HashMap<String, Vec<String>>,
}

impl DependencyIndex {
    /// Build the reverse adjacency. Each dependents list is sorted.
    pub fn build(skills: &HashMap<String, Skill>) -> Self {
        let mut dependents: HashMap<String, Vec<String>> = HashMap::new();
        for skill in skills.values() {
            for req in &skill.prerequisites {
                dependents
                    .entry(req.clone())
                    .or_default()
                    .push(skill.id.clone());
            }
        }
        for list in dependents.values_mut() {
            list.sort();
            list.dedup();
        }
        Self { dependents }
    }

    /// Direct dependents of `id`.
    pub fn dependents(&self, id: &str) -> &[String] {
        self.dependents
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
