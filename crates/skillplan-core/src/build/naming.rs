//! Profession display names and menu order.
//!
//! Pure data lookups against `PlannerConfig`; none of this affects what the
//! engine allows.

use skillplan_types::config::PlannerConfig;

use crate::catalog::Catalog;

/// Display name for a profession key.
///
/// Uses the configured override when there is one. Otherwise the category
/// prefix is dropped and the rest title-cased: `outdoors_ranger` -> `Ranger`.
pub fn display_name(config: &PlannerConfig, key: &str) -> String {
    if let Some(name) = config.profession_names.get(key) {
        return name.clone();
    }

    let base = match key.split_once('_') {
        Some((_, rest)) if !rest.is_empty() => rest.replace('_', " "),
        _ => key.to_string(),
    };
    title_case(&base)
}

/// Upper-case the first character of every word.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        let is_word = c.is_alphanumeric();
        if is_word && at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !is_word;
    }
    out
}

/// Whether `key` names a profession that belongs in the menu.
pub fn is_visible(catalog: &Catalog, config: &PlannerConfig, key: &str) -> bool {
    catalog.profession(key).is_some() && !config.is_excluded(key)
}

/// Menu order: configured starting professions first (those that exist), then
/// the rest sorted case-insensitively by display name.
pub fn menu_order(catalog: &Catalog, config: &PlannerConfig) -> Vec<String> {
    let mut order: Vec<String> = config
        .starting_professions
        .iter()
        .filter(|k| is_visible(catalog, config, k))
        .cloned()
        .collect();

    let mut rest: Vec<(String, String)> = catalog
        .professions()
        .map(|p| p.key.as_str())
        .filter(|k| is_visible(catalog, config, k) && !order.iter().any(|o| o == k))
        .map(|k| (display_name(config, k).to_lowercase(), k.to_string()))
        .collect();
    rest.sort();

    order.extend(rest.into_iter().map(|(_, k)| k));
    order
}

/// The profession shown first: head of the menu, or the first catalog key
/// when every profession is hidden.
pub fn default_profession(catalog: &Catalog, config: &PlannerConfig) -> Option<String> {
    menu_order(catalog, config)
        .into_iter()
        .next()
        .or_else(|| catalog.professions().next().map(|p| p.key.clone()))
}
