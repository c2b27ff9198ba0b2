// records.rs - Record (row) selection by name

use crate::data::AlignmentMatrix;
use crate::error::Result;
use regex::Regex;
use std::collections::HashSet;

/// Record selection applied before the column join. Only rows are removed,
/// so column positions are never affected.
#[derive(Debug, Default, Clone)]
pub struct RecordFilter {
    pub include: Option<Regex>,
    pub exclude: Option<Regex>,
    /// Exact names to keep; every listed name must exist
    pub keep: Option<HashSet<String>>,
}

impl RecordFilter {
    pub fn is_empty(&self) -> bool {
        self.include.is_none() && self.exclude.is_none() && self.keep.is_none()
    }

    pub fn accepts(&self, name: &str) -> bool {
        // Include regex filter
        if let Some(regex) = &self.include {
            if !regex.is_match(name) {
                return false;
            }
        }

        // Exclude regex filter
        if let Some(regex) = &self.exclude {
            if regex.is_match(name) {
                return false;
            }
        }

        true
    }

    pub fn apply(&self, matrix: &AlignmentMatrix) -> Result<AlignmentMatrix> {
        if self.is_empty() {
            return Ok(matrix.clone());
        }

        let listed = match &self.keep {
            Some(names) => matrix.restrict_to_names(names)?,
            None => matrix.clone(),
        };
        let filtered = listed.restrict_records(|name| self.accepts(name))?;

        if filtered.record_count() != matrix.record_count() {
            log::info!(
                "🔎 Record filters: kept {} records (removed {})",
                filtered.record_count(),
                matrix.record_count() - filtered.record_count()
            );
        }
        Ok(filtered)
    }
}
