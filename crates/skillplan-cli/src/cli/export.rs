//! Build template export command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use console::style;

use skillplan_core::build::{export_file_name, render_template};

use super::build::{parse_steps, replay, restore};
use crate::state::AppState;

/// Apply steps and write the template to stdout, a file, or a timestamped
/// file inside a directory.
pub fn export(
    state: &AppState,
    from: &[String],
    steps: &[String],
    output: Option<&Path>,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let steps = parse_steps(steps)?;
    let mut session = state.session();
    restore(&mut session, from)?;
    replay(&mut session, &steps, quiet);

    let now = Utc::now();
    let text = render_template(session.catalog(), session.selection(), session.config(), Some(now));

    let Some(output) = output else {
        if json {
            let out = serde_json::json!({ "file_name": export_file_name(now), "text": text });
            println!("{}", serde_json::to_string_pretty(&out)?);
        } else {
            println!("{text}");
        }
        return Ok(());
    };

    let path = output_path(output, now);
    std::fs::write(&path, &text).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), skills = session.selection().len(), "template exported");

    if json {
        let out = serde_json::json!({ "path": path.display().to_string() });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if !quiet {
        println!();
        println!(
            "  {} Template written to {}",
            style("✓").green().bold(),
            style(path.display()).cyan()
        );
        println!();
    }

    Ok(())
}

/// A directory gets a timestamped file name; anything else is used as-is.
fn output_path(output: &Path, at: DateTime<Utc>) -> PathBuf {
    if output.is_dir() {
        output.join(export_file_name(at))
    } else {
        output.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn output_path_names_file_inside_directory() {
        let tmp = TempDir::new().unwrap();
        let at = Utc.with_ymd_and_hms(2026, 2, 14, 9, 30, 5).unwrap();
        assert_eq!(
            output_path(tmp.path(), at),
            tmp.path().join("skill-template-2026-02-14T09-30-05-000Z.txt")
        );

        let file = tmp.path().join("build.txt");
        assert_eq!(output_path(&file, at), file);
    }
}
