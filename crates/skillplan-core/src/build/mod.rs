//! Everything built on top of a selection: profession naming, the build
//! session a UI drives, and the text export.

pub mod export;
pub mod naming;
pub mod session;

pub use export::{export_file_name, render_template};
pub use session::{BuildSession, ProfessionView, SkillCell, StepOutcome};
