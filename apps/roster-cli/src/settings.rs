// [apps/roster-cli/src/settings.rs]
//! `OptimizationSettings` (§6): a plain, `serde(default)`-annotated struct
//! loadable from a JSON file and overridable by CLI flags, the same
//! layering order the teacher's worker binaries use for their own
//! directives (struct defaults < file < CLI/env, since `clap`'s `env`
//! attribute already resolves CLI-over-env before this struct ever sees a
//! value).

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

fn default_slot_duration_minutes() -> u32 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationSettings {
    #[serde(default = "default_slot_duration_minutes")]
    pub slot_duration_minutes: u32,
}

impl Default for OptimizationSettings {
    fn default() -> Self {
        Self { slot_duration_minutes: default_slot_duration_minutes() }
    }
}

impl OptimizationSettings {
    /// Loads defaults, then overlays a JSON file if one was given, then
    /// overlays an explicit CLI override if present. Missing file paths are
    /// a hard error; an absent `settings_file` argument just keeps defaults.
    pub fn load(settings_file: Option<&Path>, slot_duration_minutes_override: Option<u32>) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(path) = settings_file {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("could not read settings file {}", path.display()))?;
            settings = serde_json::from_str(&raw)
                .with_context(|| format!("malformed settings file {}", path.display()))?;
        }

        if let Some(minutes) = slot_duration_minutes_override {
            settings.slot_duration_minutes = minutes;
        }

        Ok(settings)
    }
}
