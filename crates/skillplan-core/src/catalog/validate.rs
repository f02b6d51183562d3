//! Structural validation of the prerequisite graph.
//!
//! Uses petgraph to model prerequisite edges as a directed graph; a
//! topological sort proves acyclicity, which the cascading select walk relies
//! on for termination.

use std::collections::HashMap;

use petgraph::algo::toposort;
use petgraph::graph::DiGraph;
use skillplan_types::error::CatalogError;
use skillplan_types::skill::Skill;

/// Every prerequisite must name a skill in the catalog.
pub(super) fn check_prerequisites_known(skills: &HashMap<String, Skill>) -> Result<(), CatalogError> {
    for id in sorted_ids(skills) {
        let skill = &skills[id];
        if let Some(missing) = skill.prerequisites.iter().find(|r| !skills.contains_key(*r)) {
            return Err(CatalogError::UnknownPrerequisite {
                skill: skill.id.clone(),
                prerequisite: missing.clone(),
            });
        }
    }
    Ok(())
}

/// The prerequisite graph must be a DAG. Assumes all prerequisites are known.
pub(super) fn check_acyclic(skills: &HashMap<String, Skill>) -> Result<(), CatalogError> {
    let ids = sorted_ids(skills);

    // Self-prerequisites are reported by name before building the graph
    if let Some(id) = ids.iter().find(|id| skills[**id].prerequisites.iter().any(|r| r == *id)) {
        return Err(CatalogError::PrerequisiteCycle {
            skill: id.to_string(),
        });
    }

    // Edge from prerequisite -> dependent
    let mut graph = DiGraph::<&str, ()>::with_capacity(ids.len(), ids.len());
    let node_indices: HashMap<&str, _> = ids.iter().map(|id| (*id, graph.add_node(*id))).collect();

    for id in &ids {
        let to = node_indices[id];
        for req in &skills[*id].prerequisites {
            if let Some(&from) = node_indices.get(req.as_str()) {
                graph.add_edge(from, to, ());
            }
        }
    }

    toposort(&graph, None).map_err(|cycle| CatalogError::PrerequisiteCycle {
        skill: graph[cycle.node_id()].to_string(),
    })?;

    Ok(())
}

fn sorted_ids(skills: &HashMap<String, Skill>) -> Vec<&str> {
    let mut ids: Vec<&str> = skills.keys().map(String::as_str).collect();
    ids.sort_unstable();
    ids
}
