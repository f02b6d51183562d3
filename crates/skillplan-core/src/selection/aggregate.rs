//! Pure summaries over a selection snapshot.
//!
//! Nothing here mutates the selection or depends on engine history: the same
//! catalog and selection always produce the same output. Members are visited
//! in the selection's sorted order so floating-point sums are reproducible.

use std::collections::BTreeMap;

use serde::Serialize;
use skillplan_types::config::PlannerConfig;

use super::Selection;
use crate::build::naming::display_name;
use crate::catalog::Catalog;

/// Bucket for experience costs whose category label is blank.
pub const UNKNOWN_EXPERIENCE: &str = "unknown";

/// Sum of point costs over the selection.
pub fn total_points(catalog: &Catalog, selection: &Selection) -> u32 {
    selection
        .iter()
        .filter_map(|id| catalog.get(id))
        .fold(0u32, |acc, s| acc.saturating_add(s.point_cost))
}

/// Per-modifier sums, sorted by modifier name.
///
/// Values without a finite numeric reading contribute nothing.
pub fn aggregate_modifiers(catalog: &Catalog, selection: &Selection) -> Vec<(String, f64)> {
    let mut sums: BTreeMap<&str, f64> = BTreeMap::new();
    for skill in selection.iter().filter_map(|id| catalog.get(id)) {
        for (name, value) in &skill.modifiers {
            if let Some(n) = value.as_number() {
                *sums.entry(name.as_str()).or_insert(0.0) += n;
            }
        }
    }
    sums.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

/// Per-category experience sums, sorted by category.
///
/// Zero costs contribute nothing and categories totalling zero are omitted.
/// Blank category labels go to the `"unknown"` bucket.
pub fn aggregate_experience(catalog: &Catalog, selection: &Selection) -> Vec<(String, i64)> {
    let mut sums: BTreeMap<&str, i64> = BTreeMap::new();
    for skill in selection.iter().filter_map(|id| catalog.get(id)) {
        let Some(xp) = &skill.experience else {
            continue;
        };
        if xp.cost == 0 {
            continue;
        }
        let category = match xp.category.trim() {
            "" => UNKNOWN_EXPERIENCE,
            label => label,
        };
        let entry = sums.entry(category).or_insert(0);
        *entry = entry.saturating_add(xp.cost);
    }
    sums.into_iter()
        .filter(|(_, v)| *v != 0)
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

/// Number of selected skills per owning profession, sorted by the
/// profession's display name ignoring case, like the profession menu.
pub fn profession_counts(
    catalog: &Catalog,
    selection: &Selection,
    config: &PlannerConfig,
) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for key in selection.iter().filter_map(|id| catalog.profession_of(id)) {
        *counts.entry(key).or_insert(0) += 1;
    }

    let mut out: Vec<(String, String, usize)> = counts
        .into_iter()
        .map(|(key, n)| (display_name(config, key).to_lowercase(), key.to_string(), n))
        .collect();
    out.sort();
    out.into_iter().map(|(_, key, n)| (key, n)).collect()
}

/// Everything a presentation layer shows next to the skill grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildSummary {
    pub points_used: u32,
    pub point_cap: u32,
    pub skill_count: usize,
    pub skills: Selection,
    pub modifiers: Vec<(String, f64)>,
    pub experience: Vec<(String, i64)>,
    pub professions: Vec<(String, usize)>,
}

impl BuildSummary {
    pub fn new(catalog: &Catalog, selection: &Selection, config: &PlannerConfig) -> Self {
        Self {
            points_used: total_points(catalog, selection),
            point_cap: config.point_cap,
            skill_count: selection.len(),
            skills: selection.clone(),
            modifiers: aggregate_modifiers(catalog, selection),
            experience: aggregate_experience(catalog, selection),
            professions: profession_counts(catalog, selection, config),
        }
    }
}
