//! A build in progress: selection engine, config and the viewed profession.
//!
//! `BuildSession` is what a presentation layer drives. It replays
//! `BuildStep`s against the engine, applies the profession-switch reset rule,
//! and produces `ProfessionView`s carrying the per-button state a UI draws.

use std::sync::Arc;

use serde::Serialize;
use skillplan_types::config::PlannerConfig;
use skillplan_types::error::SelectionError;
use skillplan_types::step::BuildStep;

use super::naming::{default_profession, display_name, is_visible};
use crate::catalog::Catalog;
use crate::selection::aggregate::BuildSummary;
use crate::selection::{Selection, SelectionEngine, Toggled};

/// Result of applying one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Selected(Vec<String>),
    Deselected(Vec<String>),
    /// The viewed profession changed; `reset` is true when the build was cleared.
    Switched { profession: String, reset: bool },
    Reset,
}

/// Draw state for one skill button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCell {
    pub id: String,
    pub title: String,
    pub selected: bool,
    /// Every direct prerequisite is selected (or the skill itself is).
    pub selectable: bool,
    /// Selected, or selecting it would stay within the point cap.
    pub enabled: bool,
}

/// One profession laid out as anchors plus grid columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfessionView {
    pub key: String,
    pub name: String,
    pub novice: Option<SkillCell>,
    pub master: Option<SkillCell>,
    pub columns: Vec<Vec<Option<SkillCell>>>,
}

#[derive(Debug, Clone)]
pub struct BuildSession {
    engine: SelectionEngine,
    config: PlannerConfig,
    current: Option<String>,
}

impl BuildSession {
    /// Start an empty build viewing the default profession.
    pub fn new(catalog: Arc<Catalog>, config: PlannerConfig) -> Self {
        let current = default_profession(&catalog, &config);
        Self {
            engine: SelectionEngine::new(catalog),
            config,
            current,
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        self.engine.catalog()
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn selection(&self) -> &Selection {
        self.engine.selection()
    }

    pub fn cap(&self) -> u32 {
        self.config.point_cap
    }

    /// Key of the profession being viewed.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn summary(&self) -> BuildSummary {
        BuildSummary::new(self.catalog(), self.selection(), &self.config)
    }

    /// Replace the build with `ids`, each selected in order under the cap.
    /// On failure the current build is left as it was.
    pub fn restore<I, S>(&mut self, ids: I) -> Result<(), SelectionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let engine = SelectionEngine::from_selection(Arc::clone(self.catalog()), ids, self.cap())?;
        tracing::debug!(skills = engine.selection().len(), "build restored");
        self.engine = engine;
        Ok(())
    }

    /// Apply one step. Budget and unknown-skill rejections leave the build
    /// unchanged.
    pub fn apply(&mut self, step: &BuildStep) -> Result<StepOutcome, SelectionError> {
        let cap = self.cap();
        match step {
            BuildStep::Select(id) => self.engine.select(id, cap).map(StepOutcome::Selected),
            BuildStep::Deselect(id) => Ok(StepOutcome::Deselected(self.engine.deselect(id))),
            BuildStep::Toggle(id) => self.engine.toggle(id, cap).map(|t| match t {
                Toggled::Selected(ids) => StepOutcome::Selected(ids),
                Toggled::Deselected(ids) => StepOutcome::Deselected(ids),
            }),
            BuildStep::SwitchProfession(key) => {
                let reset = self.switch_profession(key);
                Ok(StepOutcome::Switched {
                    profession: self.current.clone().unwrap_or_default(),
                    reset,
                })
            }
            BuildStep::Reset => {
                self.engine.reset();
                Ok(StepOutcome::Reset)
            }
        }
    }

    /// View `key`, falling back to the default profession for unknown or
    /// hidden keys. Returns whether the build was reset.
    pub fn switch_profession(&mut self, key: &str) -> bool {
        let target = if is_visible(self.catalog(), &self.config, key) {
            Some(key.to_string())
        } else {
            tracing::warn!(profession = key, "unknown or hidden profession, using default");
            default_profession(self.catalog(), &self.config)
        };

        let changed = target != self.current;
        let reset = changed && self.config.reset_on_profession_switch && !self.engine.selection().is_empty();
        if reset {
            self.engine.reset();
        }
        self.current = target;

        tracing::debug!(profession = ?self.current, reset, "profession switched");
        reset
    }

    /// Draw state for the currently viewed profession.
    pub fn current_view(&self) -> Option<ProfessionView> {
        self.current.as_deref().and_then(|key| self.view(key))
    }

    /// Draw state for any profession in the catalog, hidden ones included.
    pub fn view(&self, key: &str) -> Option<ProfessionView> {
        let profession = self.catalog().profession(key)?;
        let cell = |id: &Option<String>| id.as_deref().map(|id| self.cell(id));

        Some(ProfessionView {
            key: profession.key.clone(),
            name: display_name(&self.config, &profession.key),
            novice: cell(&profession.novice),
            master: cell(&profession.master),
            columns: profession
                .columns
                .iter()
                .map(|column| column.iter().map(cell).collect())
                .collect(),
        })
    }

    fn cell(&self, id: &str) -> SkillCell {
        let selected = self.engine.is_selected(id);
        SkillCell {
            id: id.to_string(),
            title: self.catalog().display_title(id).to_string(),
            selected,
            selectable: self.engine.can_select(id),
            enabled: selected || self.engine.can_afford(id, self.cap()),
        }
    }
}
