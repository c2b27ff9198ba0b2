// lib.rs - phylofilt library root

//! # phylofilt - Join a multiple-sequence alignment with per-column conservation scores
//!
//! Given a FASTA alignment and a score file holding one score (e.g. phyloP) per
//! alignment column, this library binds the two by column index, classifies
//! every score into labelled ranges, and produces a filtered view of the columns
//! whose score lies inside a cutoff interval.
//!
//! ## Features
//!
//! - **Positional join**: column count is checked once before any per-column work
//! - **Classification**: independent, possibly overlapping score ranges
//! - **Dual output**: filtered table (CSV/TSV) and filtered FASTA from one view
//! - **Reference gap stripping**: remove columns where a reference record has a gap
//! - **All-or-nothing output**: a failed run leaves no files behind
//!
//! ## Basic Usage
//!
//! ```rust
//! use phylofilt::prelude::*;
//!
//! let matrix = AlignmentMatrix::parse(">A\nAC-G\n>B\nACTG\n")?;
//! let scores = ScoreSeries::parse("2.0\n0.2\n-2.0\n0.49\n")?;
//!
//! let (view, summary) = run(&matrix, &scores, Cutoff::new(-0.5, 0.5), &CategoryRange::defaults())?;
//! assert_eq!(view.retained, vec![1, 3]);
//! assert_eq!(summary.count("neutral"), Some(2));
//!
//! let fasta = encode_fasta(&view.matrix)?;
//! assert_eq!(fasta, b">A\nCG\n>B\nCG\n");
//! # Ok::<(), phylofilt::PipelineError>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod core;
pub mod data;
pub mod error;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args};
    pub use crate::core::{classify, run, run_pipeline};
    pub use crate::core::{CategoryRange, Cutoff, FilterJoin, FilteredView, Summary};
    pub use crate::core::{PipelineConfig, PipelineOutcome};
    pub use crate::data::{transpose, AlignmentMatrix, RecordFilter, ScoreSeries, SequenceRecord};
    pub use crate::error::PipelineError;
    pub use crate::output::{encode_fasta, encode_table, SummaryFormat, TableFormat};
}

// Re-export main types at the root level for convenience
pub use self::core::{CategoryRange, Cutoff, FilterJoin, PipelineConfig};
pub use data::{AlignmentMatrix, ScoreSeries, SequenceRecord};
pub use error::PipelineError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "phylofilt v{} - Alignment/score join, classification and column filtering",
        VERSION
    )
}
