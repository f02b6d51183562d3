//! Skill build planner entry point.
//!
//! Binary name: `skillplan`
//!
//! Parses CLI arguments, loads the skill catalog and config, then dispatches
//! to the command handler.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use skillplan_observe::tracing_setup::{LogOptions, init_tracing, shutdown_tracing};
use state::AppState;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_options = LogOptions {
        verbosity: cli.verbose,
        quiet: cli.quiet,
        json: cli.log_json,
        otel: cli.otel,
    };
    if let Err(err) = init_tracing(&log_options) {
        eprintln!("Warning: logging unavailable: {err}");
    }

    let result = run(cli);
    shutdown_tracing();
    result
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Shell completions don't need the catalog
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "skillplan", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init(cli.data.as_deref(), cli.cap)?;

    match cli.command {
        Commands::Professions => {
            cli::profession::list_professions(&state, cli.json)?;
        }

        Commands::Show { profession, steps } => {
            cli::profession::show_profession(&state, &profession, &cli.from, &steps, cli.json, cli.quiet)?;
        }

        Commands::Plan { steps } => {
            cli::plan::plan(&state, &cli.from, &steps, cli.json, cli.quiet)?;
        }

        Commands::Export { steps, output } => {
            cli::export::export(&state, &cli.from, &steps, output.as_deref(), cli.json, cli.quiet)?;
        }

        Commands::Check => {
            cli::check::check(&state, cli.json)?;
        }

        // Handled before loading state
        Commands::Completions { .. } => {}
    }

    Ok(())
}
