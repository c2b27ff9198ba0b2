// join.rs - Positional join of alignment columns with scores, and cutoff filtering

use crate::core::classify::{classify, CategoryRange, Summary};
use crate::data::{AlignmentMatrix, ScoreSeries};
use crate::error::{PipelineError, Result};
use serde::{Deserialize, Serialize};

/// Closed retain interval `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cutoff {
    pub min: f64,
    pub max: f64,
}

impl Cutoff {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, score: f64) -> bool {
        self.min <= score && score <= self.max
    }
}

impl Default for Cutoff {
    fn default() -> Self {
        Self::new(-0.5, 0.5)
    }
}

/// Columns and scores that passed the cutoff.
///
/// `retained[k]` is the original column index of the k-th kept column.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView {
    pub matrix: AlignmentMatrix,
    pub scores: ScoreSeries,
    pub retained: Vec<usize>,
}

impl FilteredView {
    pub fn retained_count(&self) -> usize {
        self.retained.len()
    }
}

/// An alignment bound to its score series. Construction checks that both
/// sides have the same number of columns; column index is the join key.
#[derive(Debug, Clone, Copy)]
pub struct FilterJoin<'a> {
    matrix: &'a AlignmentMatrix,
    scores: &'a ScoreSeries,
}

impl<'a> FilterJoin<'a> {
    pub fn bind(matrix: &'a AlignmentMatrix, scores: &'a ScoreSeries) -> Result<Self> {
        if matrix.column_count() != scores.len() {
            return Err(PipelineError::ColumnCountMismatch {
                columns: matrix.column_count(),
                scores: scores.len(),
            });
        }
        Ok(Self { matrix, scores })
    }

    pub fn matrix(&self) -> &'a AlignmentMatrix {
        self.matrix
    }

    pub fn scores(&self) -> &'a ScoreSeries {
        self.scores
    }

    /// Stable filter over columns `0..C` in index order
    pub fn filter(&self, cutoff: Cutoff) -> FilteredView {
        let retained: Vec<usize> = self
            .scores
            .iter()
            .enumerate()
            .filter(|&(_, score)| cutoff.contains(score))
            .map(|(j, _)| j)
            .collect();

        FilteredView {
            matrix: self.matrix.select_columns(&retained),
            scores: self.scores.select(&retained),
            retained,
        }
    }

    /// Filter by `cutoff` and classify the full, unfiltered series
    pub fn run(&self, cutoff: Cutoff, ranges: &[CategoryRange]) -> (FilteredView, Summary) {
        let summary = classify(self.scores, ranges);
        let view = self.filter(cutoff);
        log::info!(
            "🎯 Cutoff [{}, {}]: retained {} of {} columns",
            cutoff.min,
            cutoff.max,
            view.retained_count(),
            self.scores.len()
        );
        (view, summary)
    }
}

/// Bind, filter and classify in one step
pub fn run(
    matrix: &AlignmentMatrix,
    scores: &ScoreSeries,
    cutoff: Cutoff,
    ranges: &[CategoryRange],
) -> Result<(FilteredView, Summary)> {
    Ok(FilterJoin::bind(matrix, scores)?.run(cutoff, ranges))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> (AlignmentMatrix, ScoreSeries) {
        (
            AlignmentMatrix::parse(">A\nAC-G\n>B\nACTG\n").unwrap(),
            ScoreSeries::new(vec![2.0, 0.2, -2.0, 0.49]),
        )
    }

    #[test]
    fn test_scenario_filter() {
        let (matrix, scores) = scenario();
        let (view, summary) =
            run(&matrix, &scores, Cutoff::default(), &CategoryRange::defaults()).unwrap();

        assert_eq!(view.retained, vec![1, 3]);
        assert_eq!(view.matrix.column(0), Some(&b"CC"[..]));
        assert_eq!(view.matrix.column(1), Some(&b"GG"[..]));
        assert_eq!(view.scores.as_slice(), &[0.2, 0.49]);
        assert_eq!(view.matrix.record_sequence(0), b"CG".to_vec());
        assert_eq!(view.matrix.record_sequence(1), b"CG".to_vec());

        // classification is over the unfiltered series
        assert_eq!(summary.total_columns, 4);
        assert_eq!(summary.count("conserved"), Some(1));
        assert_eq!(summary.count("neutral"), Some(2));
        assert_eq!(summary.count("accelerated"), Some(1));
    }

    #[test]
    fn test_mismatch_rejected() {
        let matrix = AlignmentMatrix::parse(">A\nACGTA\n>B\nACGTT\n").unwrap();
        let scores = ScoreSeries::new(vec![0.0; 4]);
        match FilterJoin::bind(&matrix, &scores) {
            Err(PipelineError::ColumnCountMismatch { columns, scores }) => {
                assert_eq!(columns, 5);
                assert_eq!(scores, 4);
            }
            other => panic!("expected mismatch, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_positional_correspondence() {
        let matrix =
            AlignmentMatrix::parse(">x\nACGTACGTAC\n>y\nTGCATGCATG\n>z\nA-G-A-G-A-\n").unwrap();
        let scores = ScoreSeries::new(vec![0.1, 1.0, -0.3, 9.0, 0.0, -4.0, 0.5, 0.6, -0.5, 0.2]);
        let join = FilterJoin::bind(&matrix, &scores).unwrap();
        let view = join.filter(Cutoff::default());

        assert_eq!(view.retained, vec![0, 2, 4, 6, 8, 9]);
        for (k, &j) in view.retained.iter().enumerate() {
            assert_eq!(view.scores.get(k), scores.get(j));
            assert_eq!(view.matrix.column(k), matrix.column(j));
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let (matrix, scores) = scenario();
        let cutoff = Cutoff::new(0.0, 2.0);
        let once = FilterJoin::bind(&matrix, &scores).unwrap().filter(cutoff);
        let twice = FilterJoin::bind(&once.matrix, &once.scores)
            .unwrap()
            .filter(cutoff);

        assert_eq!(twice.matrix, once.matrix);
        assert_eq!(twice.scores, once.scores);
    }

    #[test]
    fn test_count_conservation() {
        let (matrix, scores) = scenario();
        for cutoff in [
            Cutoff::default(),
            Cutoff::new(-10.0, 10.0),
            Cutoff::new(5.0, 6.0),
            Cutoff::new(1.0, -1.0),
        ] {
            let view = FilterJoin::bind(&matrix, &scores).unwrap().filter(cutoff);
            let dropped = (0..scores.len())
                .filter(|j| !view.retained.contains(j))
                .count();
            assert_eq!(view.retained_count() + dropped, matrix.column_count());
            assert_eq!(view.matrix.record_count(), matrix.record_count());
        }
    }
}
