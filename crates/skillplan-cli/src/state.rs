//! Application state: the validated catalog and effective configuration.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use skillplan_core::Catalog;
use skillplan_core::build::BuildSession;
use skillplan_core::config::{load_config, resolve_data_dir, resolve_point_cap};
use skillplan_core::loader::{DATA_FILE_NAME, load_catalog};
use skillplan_types::config::PlannerConfig;

/// Everything a command needs, loaded once per invocation.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: PlannerConfig,
    pub data_dir: PathBuf,
    pub data_path: PathBuf,
}

impl AppState {
    /// Resolve paths, read `config.toml` and load the skill data.
    ///
    /// `--data` wins over `{data_dir}/skills.json`; `--cap` wins over the
    /// configured point cap.
    pub fn init(data_override: Option<&Path>, cap_override: Option<u32>) -> Result<Self> {
        let data_dir = resolve_data_dir();
        Self::init_in(&data_dir, data_override, cap_override)
    }

    pub fn init_in(data_dir: &Path, data_override: Option<&Path>, cap_override: Option<u32>) -> Result<Self> {
        let mut config = load_config(data_dir);
        config.point_cap = resolve_point_cap(&config, cap_override);

        let data_path = data_override
            .map(Path::to_path_buf)
            .unwrap_or_else(|| data_dir.join(DATA_FILE_NAME));
        let catalog = load_catalog(&data_path)
            .with_context(|| format!("could not load skill data from {}", data_path.display()))?;

        Ok(Self {
            catalog: Arc::new(catalog),
            config,
            data_dir: data_dir.to_path_buf(),
            data_path,
        })
    }

    /// A fresh build viewing the default profession.
    pub fn session(&self) -> BuildSession {
        BuildSession::new(Arc::clone(&self.catalog), self.config.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillplan_core::build::StepOutcome;
    use tempfile::TempDir;

    const DATA: &str = r#"{"skills": {"combat_brawler": {
        "novice": {"name": "brawler_novice", "skillpoint_cost": 15},
        "trees": [[{"name": "brawler_1", "skillpoint_cost": 10, "skills_required": ["brawler_novice"]}]]
    }}}"#;

    #[test]
    fn init_reads_data_and_config_from_data_dir() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("skills.json"), DATA).unwrap();
        std::fs::write(tmp.path().join("config.toml"), "point_cap = 20").unwrap();

        let state = AppState::init_in(tmp.path(), None, None).unwrap();
        assert_eq!(state.catalog.len(), 2);
        assert_eq!(state.config.point_cap, 20);
        assert_eq!(state.session().current(), Some("combat_brawler"));
    }

    #[test]
    fn init_applies_overrides() {
        let tmp = TempDir::new().unwrap();
        let data_path = tmp.path().join("custom.json");
        std::fs::write(&data_path, DATA).unwrap();

        let state = AppState::init_in(tmp.path(), Some(&data_path), Some(0)).unwrap();
        assert_eq!(state.data_path, data_path);
        assert_eq!(state.config.point_cap, 0);
    }

    #[test]
    fn sample_data_replays_a_build() {
        let tmp = TempDir::new().unwrap();
        let sample = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/sample-skills.json");
        let state = AppState::init_in(tmp.path(), Some(&sample), None).unwrap();
        assert_eq!(state.catalog.len(), 17);

        let mut session = state.session();
        assert_eq!(session.current(), Some("combat_brawler"));

        let added = session
            .apply(&"+combat_brawler_master".parse().unwrap())
            .unwrap();
        assert!(matches!(added, StepOutcome::Selected(ref ids) if ids.len() == 6));
        session.apply(&"+outdoors_ranger_novice".parse().unwrap()).unwrap();

        let summary = session.summary();
        assert_eq!(summary.points_used, 21 + 22);
        assert!(summary.modifiers.contains(&("unarmed_speed".to_string(), 8.0)));
        assert!(summary.experience.contains(&("unknown".to_string(), 5000)));

        let mut restored = state.session();
        restored
            .restore(["combat_brawler_master", "outdoors_ranger_novice"])
            .unwrap();
        assert_eq!(restored.selection(), session.selection());
    }

    #[test]
    fn init_without_data_fails_with_path() {
        let tmp = TempDir::new().unwrap();
        let err = AppState::init_in(tmp.path(), None, None).unwrap_err();
        assert!(format!("{err:#}").contains("skills.json"));
    }
}
