// classify.rs - Score classification by named numeric ranges

use crate::data::ScoreSeries;
use serde::{Deserialize, Serialize};

/// Labelled closed interval `[min, max]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRange {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl CategoryRange {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
        }
    }

    pub fn contains(&self, score: f64) -> bool {
        self.min <= score && score <= self.max
    }

    /// Default phyloP bands: conserved, neutral, accelerated
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("conserved", 1.5, 3.0),
            Self::new("neutral", -0.5, 0.5),
            Self::new("accelerated", -3.0, -1.5),
        ]
    }
}

/// Number of scores falling inside one range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    #[serde(flatten)]
    pub range: CategoryRange,
    pub count: usize,
}

/// Classification counts over a full score series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_columns: usize,
    pub score_min: Option<f64>,
    pub score_max: Option<f64>,
    pub categories: Vec<CategoryCount>,
}

impl Summary {
    pub fn count(&self, label: &str) -> Option<usize> {
        self.categories
            .iter()
            .find(|c| c.range.label == label)
            .map(|c| c.count)
    }
}

/// Count the scores inside each range. Ranges are independent: overlapping
/// ranges count the same score more than once.
pub fn classify(scores: &ScoreSeries, ranges: &[CategoryRange]) -> Summary {
    let categories = ranges
        .iter()
        .map(|range| {
            let count = scores.iter().filter(|&s| range.contains(s)).count();
            log::debug!(
                "Range {} [{}, {}]: counted {} scores",
                range.label,
                range.min,
                range.max,
                count
            );
            CategoryCount {
                range: range.clone(),
                count,
            }
        })
        .collect();

    Summary {
        total_columns: scores.len(),
        score_min: scores.min(),
        score_max: scores.max(),
        categories,
    }
}
