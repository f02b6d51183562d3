//! Skill data validation command.

use anyhow::Result;
use console::style;

use skillplan_core::build::naming::menu_order;

use crate::state::AppState;

/// Report what was loaded. Loading already validated the catalog, so
/// reaching this point means the data is sound.
pub fn check(state: &AppState, json: bool) -> Result<()> {
    let professions = state.catalog.professions().count();
    let visible = menu_order(&state.catalog, &state.config).len();
    let skills = state.catalog.len();
    let edges: usize = state.catalog.skills().map(|s| s.prerequisites.len()).sum();

    if json {
        let out = serde_json::json!({
            "data": state.data_path.display().to_string(),
            "data_dir": state.data_dir.display().to_string(),
            "professions": professions,
            "visible_professions": visible,
            "skills": skills,
            "prerequisite_edges": edges,
            "point_cap": state.config.point_cap,
            "valid": true,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let check_mark = style("✓").green();
    println!();
    println!(
        "  {} Skill data at {}",
        style("🔍").bold(),
        style(state.data_path.display()).dim()
    );
    println!();
    println!("  {check_mark} {} professions ({} in menu)", professions, visible);
    println!("  {check_mark} {} skills, {} prerequisite links", skills, edges);
    println!("  {check_mark} No duplicate ids, dangling prerequisites or cycles");
    println!("  {check_mark} Point cap: {}", style(state.config.point_cap).bold());
    println!("  {}", style(format!("Config dir: {}", state.data_dir.display())).dim());
    println!();

    Ok(())
}
