use thiserror::Error;

/// Errors raised while building the catalog. All of them are fatal: the
/// planner refuses to start on an invalid catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("skill '{id}' is defined by both '{first}' and '{second}'")]
    DuplicateSkill {
        id: String,
        first: String,
        second: String,
    },

    #[error("catalog contains no skills")]
    EmptyCatalog,

    #[error("skill '{skill}' requires unknown skill '{prerequisite}'")]
    UnknownPrerequisite { skill: String, prerequisite: String },

    #[error("prerequisite cycle detected involving skill '{skill}'")]
    PrerequisiteCycle { skill: String },
}

/// Errors from selection operations. Never fatal: the selection is left
/// exactly as it was.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("selecting '{id}' would cost {projected} points (cap {cap})")]
    BudgetExceeded { id: String, projected: u32, cap: u32 },

    #[error("unknown skill '{0}'")]
    UnknownSkill(String),
}

/// Errors from parsing a textual build step.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StepParseError {
    #[error("empty build step")]
    Empty,

    #[error("build step '{0}' is missing a skill or profession name")]
    MissingTarget(String),
}
