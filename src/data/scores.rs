// scores.rs - Per-column conservation scores

use crate::error::{PipelineError, Result};
use std::path::Path;

/// Ordered scores, one per alignment column. Index is the only identity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreSeries {
    values: Vec<f64>,
}

impl ScoreSeries {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Parse one score per non-empty line. Blank lines do not consume an index.
    pub fn parse(text: &str) -> Result<Self> {
        let mut values = Vec::new();

        for (line_num, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let value = trimmed
                .parse::<f64>()
                .map_err(|_| PipelineError::InvalidScore {
                    line: line_num + 1,
                    text: trimmed.to_string(),
                })?;
            values.push(value);
        }

        Ok(Self { values })
    }

    /// Read and parse a score file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| PipelineError::io(path, e))?;
        let scores = Self::parse(&text)?;
        log::info!("📈 Total scores: {} ({})", scores.len(), path.display());
        if let (Some(min), Some(max)) = (scores.min(), scores.max()) {
            log::info!("📈 Min score: {}, Max score: {}", min, max);
        }
        Ok(scores)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn min(&self) -> Option<f64> {
        self.iter().filter(|v| !v.is_nan()).reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.iter().filter(|v| !v.is_nan()).reduce(f64::max)
    }

    /// New series holding only the given positions, in the given order
    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            values: indices.iter().map(|&j| self.values[j]).collect(),
        }
    }
}
