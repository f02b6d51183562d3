//! Step replay shared by the build commands.

use anyhow::{Context, Result};
use console::style;

use skillplan_core::build::{BuildSession, StepOutcome};
use skillplan_types::error::SelectionError;
use skillplan_types::step::BuildStep;

/// Parse every step up front so a typo fails before anything is applied.
pub fn parse_steps(steps: &[String]) -> Result<Vec<BuildStep>> {
    steps
        .iter()
        .map(|s| s.parse::<BuildStep>().with_context(|| format!("invalid build step '{s}'")))
        .collect()
}

/// Seed the build from `--from` ids. An empty list leaves the build alone.
pub fn restore(session: &mut BuildSession, ids: &[String]) -> Result<()> {
    if ids.is_empty() {
        return Ok(());
    }
    session
        .restore(ids)
        .with_context(|| format!("cannot start from '{}'", ids.join(",")))
}

/// Apply `steps` in order. Rejected steps are reported and skipped; the rest
/// still run. Returns the number of rejections.
pub fn replay(session: &mut BuildSession, steps: &[BuildStep], quiet: bool) -> usize {
    let mut rejected = 0;
    for step in steps {
        match session.apply(step) {
            Ok(outcome) => {
                tracing::debug!(%step, ?outcome, "step applied");
                if let StepOutcome::Switched { reset: true, profession } = &outcome {
                    if quiet {
                        continue;
                    }
                    eprintln!(
                        "  {} Switched to {}, build cleared",
                        style("↺").yellow(),
                        style(profession).cyan()
                    );
                }
            }
            Err(err) => {
                rejected += 1;
                if !quiet {
                    eprintln!("  {} {}", style("⚠").yellow().bold(), describe(&err));
                }
            }
        }
    }
    rejected
}

fn describe(err: &SelectionError) -> String {
    match err {
        SelectionError::BudgetExceeded { id, projected, cap } => format!(
            "Skipped {}: needs {} points, cap is {}",
            style(id).bold(),
            projected,
            cap
        ),
        SelectionError::UnknownSkill(id) => format!("Skipped {}: no such skill", style(id).bold()),
    }
}
