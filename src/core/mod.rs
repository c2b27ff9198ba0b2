// mod.rs - Core logic module

pub mod classify;
pub mod join;
pub mod pipeline;

// Re-export main types for convenience
pub use classify::{classify, CategoryCount, CategoryRange, Summary};
pub use join::{run, Cutoff, FilterJoin, FilteredView};
pub use pipeline::{build_artifacts, run_pipeline, PipelineConfig, PipelineOutcome};
