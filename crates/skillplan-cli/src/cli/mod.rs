//! CLI command definitions for the `skillplan` binary.
//!
//! Uses clap derive macros for argument parsing. Commands that work on a
//! build take a list of steps replayed in order: `+id` select, `-id`
//! deselect, bare `id` toggle, `@key` switch profession, `!` reset.

pub mod build;
pub mod check;
pub mod export;
pub mod plan;
pub mod profession;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Plan skill builds under a point cap.
#[derive(Parser)]
#[command(name = "skillplan", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress warnings and status lines. Requested output (summaries,
    /// grids, templates, JSON) is still printed.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Skill data file (defaults to skills.json in the data directory).
    #[arg(long, global = true, env = "SKILLPLAN_DATA")]
    pub data: Option<PathBuf>,

    /// Override the skill point cap from config.toml.
    #[arg(long, global = true)]
    pub cap: Option<u32>,

    /// Start from a saved build: skill ids selected in order before any
    /// steps run. Fails if one is unknown or does not fit under the cap.
    #[arg(long, global = true, value_delimiter = ',', value_name = "IDS")]
    pub from: Vec<String>,

    /// Write log lines as JSON.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Export trace spans to stdout via OpenTelemetry.
    #[arg(long, global = true, hide = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List professions in menu order.
    #[command(alias = "ls")]
    Professions,

    /// Show one profession's skill grid after applying steps.
    Show {
        /// Profession key (e.g. combat_marksman).
        profession: String,

        /// Build steps to apply first.
        #[arg(allow_hyphen_values = true)]
        steps: Vec<String>,
    },

    /// Apply steps and summarize the build.
    Plan {
        /// Build steps to apply.
        #[arg(allow_hyphen_values = true)]
        steps: Vec<String>,
    },

    /// Apply steps and write the build template.
    Export {
        /// Build steps to apply.
        #[arg(allow_hyphen_values = true)]
        steps: Vec<String>,

        /// Output file, or a directory to write a timestamped file into.
        /// Prints to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load and validate the skill data.
    Check,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
