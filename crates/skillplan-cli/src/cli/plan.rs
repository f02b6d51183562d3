//! Build summary command.

use anyhow::Result;
use console::style;

use skillplan_core::build::export::format_number;
use skillplan_core::build::naming::display_name;
use skillplan_core::selection::aggregate::BuildSummary;

use super::build::{parse_steps, replay, restore};
use super::profession::point_bar;
use crate::state::AppState;

/// Apply steps and print points, modifiers, experience and per-profession
/// counts.
pub fn plan(state: &AppState, from: &[String], steps: &[String], json: bool, quiet: bool) -> Result<()> {
    let steps = parse_steps(steps)?;
    let mut session = state.session();
    restore(&mut session, from)?;
    let rejected = replay(&mut session, &steps, quiet);
    let summary = session.summary();

    if json {
        let mut out = serde_json::to_value(&summary)?;
        out["rejected_steps"] = rejected.into();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print_summary(state, &summary);
    Ok(())
}

fn print_summary(state: &AppState, summary: &BuildSummary) {
    println!();
    println!("  {}", point_bar(summary.points_used, summary.point_cap));
    println!("  Skills: {}", style(summary.skill_count).bold());
    println!();

    println!("  {}", style("── Professions ──").dim());
    if summary.professions.is_empty() {
        println!("  {}", style("none").dim());
    }
    for (key, count) in &summary.professions {
        println!(
            "  {:<24} {}",
            display_name(&state.config, key),
            style(count).cyan()
        );
    }
    println!();

    println!("  {}", style("── Skill Mods ──").dim());
    if summary.modifiers.is_empty() {
        println!("  {}", style("none").dim());
    }
    for (name, value) in &summary.modifiers {
        println!("  {:<24} {}", name, style(format_number(*value)).green());
    }
    println!();

    println!("  {}", style("── Experience ──").dim());
    if summary.experience.is_empty() {
        println!("  {}", style("none").dim());
    }
    for (category, cost) in &summary.experience {
        println!("  {:<24} {}", category, format_xp(*cost));
    }
    println!();
}

/// Thousands separators: `12500` -> `12,500`.
fn format_xp(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_xp_groups_thousands() {
        assert_eq!(format_xp(0), "0");
        assert_eq!(format_xp(999), "999");
        assert_eq!(format_xp(12_500), "12,500");
        assert_eq!(format_xp(1_000_000), "1,000,000");
        assert_eq!(format_xp(-4_200), "-4,200");
    }
}
