// [apps/roster-cli/src/lib.rs]
/*!
 * APARATO: ROSTER CLI LIBRARY ROOT
 * RESPONSABILIDAD: ORQUESTACIÓN DE LA TUBERÍA CSV -> OPTIMIZER -> JSON
 *
 * The binary in `main.rs` is a thin argument shell; everything it can hand
 * off lives here so it can be exercised without a process boundary.
 */

pub mod pipeline;
pub mod settings;

pub use pipeline::{run_pipeline, PipelineArguments};
pub use settings::OptimizationSettings;
