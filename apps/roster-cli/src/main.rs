// [apps/roster-cli/src/main.rs]
/*!
 * APARATO: ROSTER CLI SHELL
 * RESPONSABILIDAD: ORQUESTACIÓN DE ARGUMENTOS Y DISPARO DEL PIPELINE
 */

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use tracing::{info, instrument};

use roster_cli_lib::{run_pipeline, OptimizationSettings, PipelineArguments};

/// Command-line surface for one optimization run against CSV fixtures.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Runs the duty-roster optimizer against a configurations/initialSchedule CSV pair."
)]
struct CommandArguments {
    /// Path to the `configurations` CSV table.
    #[arg(long, env = "ROSTER_CONFIGURATIONS_PATH")]
    configurations: PathBuf,

    /// Path to the `initialSchedule` CSV table.
    #[arg(long, env = "ROSTER_SCHEDULE_PATH")]
    schedule: PathBuf,

    /// Shift code to filter `initialSchedule` rows by (`smena`).
    #[arg(long, env = "ROSTER_SHIFT")]
    shift: String,

    /// RFC3339 timestamp identifying the shift's calendar date.
    #[arg(long, env = "ROSTER_DATE")]
    date: DateTime<Utc>,

    /// RFC3339 shift start timestamp.
    #[arg(long, env = "ROSTER_SHIFT_START")]
    shift_start: DateTime<Utc>,

    /// RFC3339 shift end timestamp; may be earlier than `shift_start` for a
    /// shift crossing midnight.
    #[arg(long, env = "ROSTER_SHIFT_END")]
    shift_end: DateTime<Utc>,

    /// Optional JSON file overlaying `OptimizationSettings` defaults.
    #[arg(long, env = "ROSTER_SETTINGS_FILE")]
    settings_file: Option<PathBuf>,

    /// Overrides `OptimizationSettings.slot_duration_minutes`.
    #[arg(long, env = "ROSTER_SLOT_DURATION_MINUTES")]
    slot_duration_minutes: Option<u32>,

    /// Wall-clock budget for the annealing search, in seconds.
    #[arg(long, env = "ROSTER_MAX_EXEC_SECONDS", default_value_t = 10)]
    max_exec_seconds: u64,

    /// PRNG seed; omit for a non-reproducible run.
    #[arg(long, env = "ROSTER_RANDOM_SEED")]
    random_seed: Option<u64>,

    /// Run the feasibility-only CP stand-in instead of simulated annealing.
    #[arg(long, env = "ROSTER_USE_CP_BACKEND", default_value_t = false)]
    use_cp_backend: bool,
}

#[instrument]
fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let arguments = CommandArguments::parse();
    info!("roster-cli: starting optimization run");

    let settings = OptimizationSettings::load(arguments.settings_file.as_deref(), arguments.slot_duration_minutes)
        .context("failed to resolve optimization settings")?;

    let report = run_pipeline(PipelineArguments {
        configurations_path: arguments.configurations,
        schedule_path: arguments.schedule,
        shift: arguments.shift,
        date: arguments.date,
        shift_start: arguments.shift_start,
        shift_end: arguments.shift_end,
        settings,
        max_exec_seconds: arguments.max_exec_seconds,
        random_seed: arguments.random_seed,
        use_cp_backend: arguments.use_cp_backend,
    })?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
