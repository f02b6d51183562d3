//! Planner configuration loader.
//!
//! Reads `config.toml` from the data directory (`~/.skillplan/` by default)
//! and deserializes it into [`PlannerConfig`]. Falls back to defaults when the
//! file is missing or malformed.

use std::path::{Path, PathBuf};

use skillplan_types::config::PlannerConfig;

/// Planner config file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "SKILLPLAN_DATA_DIR";

/// Load planner configuration from `{data_dir}/config.toml`.
///
/// A missing file is normal and gives the built-in cap, menu and names.
/// An unreadable or malformed file is logged and ignored as a whole.
pub fn load_config(data_dir: &Path) -> PlannerConfig {
    let config_path = data_dir.join(CONFIG_FILE_NAME);

    let content = match std::fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %config_path.display(), "no planner config, using built-in point cap and menu");
            return PlannerConfig::default();
        }
        Err(err) => {
            tracing::warn!(
                path = %config_path.display(),
                error = %err,
                "planner config unreadable, using built-in point cap and menu"
            );
            return PlannerConfig::default();
        }
    };

    match toml::from_str::<PlannerConfig>(&content) {
        Ok(config) => {
            tracing::debug!(
                path = %config_path.display(),
                point_cap = config.point_cap,
                starting = config.starting_professions.len(),
                excluded = config.excluded_professions.len(),
                "planner config loaded"
            );
            config
        }
        Err(err) => {
            tracing::warn!(
                path = %config_path.display(),
                error = %err,
                "planner config ignored: fix the TOML or delete the file to use the built-in point cap and menu"
            );
            PlannerConfig::default()
        }
    }
}

/// Resolve the data directory.
///
/// Checks `SKILLPLAN_DATA_DIR`, then `~/.skillplan`, then `.skillplan` in the
/// current directory.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".skillplan");
    }

    PathBuf::from(".skillplan")
}

/// Resolve the point cap: a command-line override wins over `config.toml`.
///
/// Zero is a legal cap; only zero-cost skills fit under it.
pub fn resolve_point_cap(config: &PlannerConfig, cap_override: Option<u32>) -> u32 {
    cap_override.unwrap_or(config.point_cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path());
        assert_eq!(config, PlannerConfig::default());
    }

    #[test]
    fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("config.toml"),
            r#"
point_cap = 300
export_title = "Guild Template"

[profession_names]
outdoors_scout = "Pathfinder"
"#,
        )
        .unwrap();

        let config = load_config(tmp.path());
        assert_eq!(config.point_cap, 300);
        assert_eq!(config.export_title, "Guild Template");
        assert_eq!(config.profession_names["outdoors_scout"], "Pathfinder");
        // Unlisted fields keep their defaults
        assert!(config.reset_on_profession_switch);
    }

    #[test]
    fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!").unwrap();

        let config = load_config(tmp.path());
        assert_eq!(config.point_cap, 250);
    }

    #[test]
    fn load_config_wrong_type_returns_default() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("config.toml"), "point_cap = \"lots\"").unwrap();

        assert_eq!(load_config(tmp.path()), PlannerConfig::default());
    }

    #[test]
    fn load_config_bad_field_discards_whole_file() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            "point_cap = 300\nstarting_professions = \"combat_brawler\"\n",
        )
        .unwrap();

        let config = load_config(tmp.path());
        assert_eq!(config.point_cap, 250);
        assert_eq!(config, PlannerConfig::default());
    }

    #[test]
    fn load_config_unreadable_path_returns_default() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join(CONFIG_FILE_NAME)).unwrap();

        assert_eq!(load_config(tmp.path()), PlannerConfig::default());
    }

    #[test]
    fn resolve_point_cap_prefers_override() {
        let config = PlannerConfig::default();
        assert_eq!(resolve_point_cap(&config, Some(120)), 120);
        assert_eq!(resolve_point_cap(&config, Some(0)), 0);
        assert_eq!(resolve_point_cap(&config, None), 250);
    }
}
