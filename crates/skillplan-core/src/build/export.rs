//! Plain-text build template.

use std::collections::BTreeMap;
use chrono::{DateTime, SecondsFormat, Utc};
use skillplan_types::config::PlannerConfig;

use super::naming::display_name;
use crate::catalog::Catalog;
use crate::selection::Selection;
use crate::selection::aggregate::{aggregate_modifiers, total_points};

/// Render the shareable build template.
///
/// Pure in its inputs: pass `generated_at: None` to leave out the timestamp
/// line and get byte-identical output for identical builds.
pub fn render_template(
    catalog: &Catalog,
    selection: &Selection,
    config: &PlannerConfig,
    generated_at: Option<DateTime<Utc>>,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(config.export_title.clone());
    if let Some(at) = generated_at {
        lines.push(format!("Generated: {}", timestamp(at)));
    }
    lines.push(format!(
        "Skill Points: {}/{}",
        total_points(catalog, selection),
        config.point_cap
    ));
    lines.push(format!("Total Skills: {}", selection.len()));
    lines.push(String::new());

    lines.push("[Skill Mods]".to_string());
    let mods = aggregate_modifiers(catalog, selection);
    if mods.is_empty() {
        lines.push("- none".to_string());
    } else {
        for (name, value) in &mods {
            lines.push(format!("- {name}: {}", format_number(*value)));
        }
    }
    lines.push(String::new());

    let mut by_profession: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for id in selection.iter() {
        let key = catalog.profession_of(id).unwrap_or("unknown");
        by_profession.entry(key).or_default().push(id);
    }

    for (key, ids) in &by_profession {
        lines.push(format!("[{}]", display_name(config, key)));
        // Selection order is already sorted by id
        for id in ids {
            lines.push(format!("- {id} | {}", catalog.display_title(id)));
        }
        lines.push(String::new());
    }

    if by_profession.is_empty() {
        lines.push("No skills selected.".to_string());
    }

    lines.join("\n")
}

/// File name for a template exported at `at`.
pub fn export_file_name(at: DateTime<Utc>) -> String {
    let stamp = timestamp(at).replace([':', '.'], "-");
    format!("skill-template-{stamp}.txt")
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Integral values print without a fractional part.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
