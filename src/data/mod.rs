// mod.rs - Data structures module

pub mod alignment;
pub mod records;
pub mod scores;

// Re-export main types for convenience
pub use alignment::{record_id, transpose, AlignmentMatrix, SequenceRecord, GAP};
pub use records::RecordFilter;
pub use scores::ScoreSeries;
