//! Planner configuration types.
//!
//! `PlannerConfig` represents the top-level `config.toml` that controls the
//! skill-point cap, profession menu layout, and export text. All fields have
//! sensible defaults so an empty file is a valid configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level configuration for the planner.
///
/// Loaded from `~/.skillplan/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Maximum total skill points a build may spend.
    #[serde(default = "default_point_cap")]
    pub point_cap: u32,

    /// Clear the build whenever a different profession is viewed.
    #[serde(default = "default_reset_on_profession_switch")]
    pub reset_on_profession_switch: bool,

    /// First line of the exported build template.
    #[serde(default = "default_export_title")]
    pub export_title: String,

    /// Professions pinned to the top of the menu, in this order.
    #[serde(default = "default_starting_professions")]
    pub starting_professions: Vec<String>,

    /// Rank tracks and other non-profession entries hidden from the menu.
    #[serde(default = "default_excluded_professions")]
    pub excluded_professions: Vec<String>,

    /// Display-name overrides keyed by profession key.
    #[serde(default = "default_profession_names")]
    pub profession_names: BTreeMap<String, String>,
}

fn default_point_cap() -> u32 {
    250
}

fn default_reset_on_profession_switch() -> bool {
    true
}

fn default_export_title() -> String {
    "Skill Template".to_string()
}

fn default_starting_professions() -> Vec<String> {
    [
        "crafting_artisan",
        "combat_brawler",
        "social_entertainer",
        "combat_marksman",
        "science_medic",
        "outdoors_scout",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_excluded_professions() -> Vec<String> {
    [
        "force_rank_light",
        "force_rank_dark",
        "force_title_jedi",
        "pilot_imperial_navy",
        "pilot_neutral",
        "pilot_rebel_navy",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_profession_names() -> BTreeMap<String, String> {
    [
        ("combat_marksman", "Marksmen"),
        ("combat_bountyhunter", "Bounty Hunter"),
        ("bountyhunter", "Bounty Hunter"),
        ("combat_unarmed", "Tera Kasi Master"),
        ("combat_2hsword", "Swordsman"),
        ("combat_1hsword", "Fencer"),
        ("combat_polearm", "Pikeman"),
        ("outdoors_creaturehandler", "Creature Handler"),
        ("creaturehandler", "Creature Handler"),
        ("outdoors_bio_engineer", "Bio Engineer"),
        ("crafting_droidengineer", "Droid Engineer"),
        ("science_combatmedic", "Combat Medic"),
        ("social_imagedesigner", "Image Designer"),
        ("force_sensitive_crafting_mastery", "Crafting Mastery"),
        ("force_sensitive_combat_prowess", "Combat Prowess"),
        ("force_discipline_enhancements", "Enhancer"),
        ("force_sensitive_enhanced_reflexes", "Enhanced Reflexes"),
        ("force_sensitive_heightened_senses", "Enhanced Senses"),
        ("force_discipline_healing", "Force Healing"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            point_cap: default_point_cap(),
            reset_on_profession_switch: default_reset_on_profession_switch(),
            export_title: default_export_title(),
            starting_professions: default_starting_professions(),
            excluded_professions: default_excluded_professions(),
            profession_names: default_profession_names(),
        }
    }
}

impl PlannerConfig {
    /// Whether `key` is hidden from the profession menu.
    pub fn is_excluded(&self, key: &str) -> bool {
        self.excluded_professions.iter().any(|k| k == key)
    }
}
