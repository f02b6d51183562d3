//! Profession listing and the skill grid view.

use anyhow::{Result, bail};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use skillplan_core::build::naming::{display_name, menu_order};
use skillplan_core::build::{ProfessionView, SkillCell};

use super::build::{parse_steps, replay, restore};
use crate::state::AppState;

/// List professions in menu order with their skill counts.
pub fn list_professions(state: &AppState, json: bool) -> Result<()> {
    let rows: Vec<(String, String, usize)> = menu_order(&state.catalog, &state.config)
        .into_iter()
        .map(|key| {
            let count = state
                .catalog
                .profession(&key)
                .map(|p| p.skill_ids().count())
                .unwrap_or(0);
            let name = display_name(&state.config, &key);
            (key, name, count)
        })
        .collect();

    if json {
        let items: Vec<_> = rows
            .iter()
            .map(|(key, name, skills)| {
                serde_json::json!({ "key": key, "name": name, "skills": skills })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!();
        println!("  {} No professions to show.", style("ℹ").blue().bold());
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Profession").fg(Color::White),
        Cell::new("Key").fg(Color::White),
        Cell::new("Skills").fg(Color::White),
    ]);

    for (key, name, count) in &rows {
        let name_cell = if state.config.starting_professions.contains(key) {
            Cell::new(name).fg(Color::Cyan)
        } else {
            Cell::new(name)
        };
        table.add_row(vec![
            name_cell,
            Cell::new(key).fg(Color::DarkGrey),
            Cell::new(count),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} profession{}",
        style(rows.len()).bold(),
        if rows.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

/// Apply steps, then draw one profession's anchors and grid.
pub fn show_profession(
    state: &AppState,
    key: &str,
    from: &[String],
    steps: &[String],
    json: bool,
    quiet: bool,
) -> Result<()> {
    if state.catalog.profession(key).is_none() {
        bail!("unknown profession '{key}'");
    }
    let steps = parse_steps(steps)?;

    let mut session = state.session();
    session.switch_profession(key);
    restore(&mut session, from)?;
    replay(&mut session, &steps, quiet);

    // Hidden professions can still be inspected directly
    let Some(view) = session.view(key) else {
        bail!("unknown profession '{key}'");
    };
    let summary = session.summary();

    if json {
        let out = serde_json::json!({ "view": view, "summary": summary });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} {}",
        style(&view.name).cyan().bold(),
        style(format!("({})", view.key)).dim()
    );
    println!();
    print_anchor("Novice", view.novice.as_ref());
    print_grid(&view);
    print_anchor("Master", view.master.as_ref());
    println!();
    println!("  {}", point_bar(summary.points_used, summary.point_cap));
    println!();

    Ok(())
}

fn print_anchor(label: &str, cell: Option<&SkillCell>) {
    if let Some(cell) = cell {
        println!("  {} {}", style(format!("{label}:")).dim(), render_cell(cell));
    }
}

fn print_grid(view: &ProfessionView) {
    let rows = view.columns.iter().map(Vec::len).max().unwrap_or(0);
    if rows == 0 {
        return;
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    // Entry-level skills sit at the bottom like the in-game tree
    for tier in (0..rows).rev() {
        let row: Vec<Cell> = view
            .columns
            .iter()
            .map(|column| match column.get(tier).and_then(Option::as_ref) {
                Some(cell) => grid_cell(cell),
                None => Cell::new(""),
            })
            .collect();
        table.add_row(row);
    }

    println!("{table}");
}

fn grid_cell(cell: &SkillCell) -> Cell {
    let (marker, color) = cell_state(cell);
    Cell::new(format!("{marker} {}", cell.title)).fg(color)
}

fn render_cell(cell: &SkillCell) -> String {
    let (marker, color) = cell_state(cell);
    let text = format!("{marker} {}", cell.title);
    match color {
        Color::Green => style(text).green().to_string(),
        Color::White => style(text).white().to_string(),
        _ => style(text).dim().to_string(),
    }
}

/// Selected, available (prerequisites met and affordable), or locked.
fn cell_state(cell: &SkillCell) -> (&'static str, Color) {
    if cell.selected {
        ("●", Color::Green)
    } else if cell.selectable && cell.enabled {
        ("○", Color::White)
    } else {
        ("✗", Color::DarkGrey)
    }
}

/// `Skill Points: [█████░░░░░] 125/250`
pub fn point_bar(used: u32, cap: u32) -> String {
    const WIDTH: u32 = 20;
    let filled = if cap == 0 {
        if used > 0 { WIDTH } else { 0 }
    } else {
        (u64::from(used.min(cap)) * u64::from(WIDTH) / u64::from(cap)) as u32
    };
    let bar = format!(
        "{}{}",
        "█".repeat(filled as usize),
        "░".repeat((WIDTH - filled) as usize)
    );
    let bar = if cap > 0 && used.saturating_mul(10) >= cap.saturating_mul(9) {
        style(bar).yellow().to_string()
    } else {
        style(bar).green().to_string()
    };
    format!("Skill Points: [{bar}] {used}/{cap}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(selected: bool, selectable: bool, enabled: bool) -> SkillCell {
        SkillCell {
            id: "x".to_string(),
            title: "X".to_string(),
            selected,
            selectable,
            enabled,
        }
    }

    #[test]
    fn cell_state_markers() {
        assert_eq!(cell_state(&cell(true, true, true)).0, "●");
        assert_eq!(cell_state(&cell(false, true, true)).0, "○");
        assert_eq!(cell_state(&cell(false, true, false)).0, "✗");
        assert_eq!(cell_state(&cell(false, false, true)).0, "✗");
    }

    #[test]
    fn point_bar_shows_totals() {
        console::set_colors_enabled(false);
        assert_eq!(
            point_bar(125, 250),
            format!("Skill Points: [{}{}] 125/250", "█".repeat(10), "░".repeat(10))
        );
        assert!(point_bar(0, 0).ends_with("] 0/0"));
    }
}
