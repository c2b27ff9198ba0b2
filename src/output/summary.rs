// summary.rs - Human-readable and JSON summary reports

use crate::core::{Cutoff, Summary};
use crate::error::{PipelineError, Result};
use crate::output::encode::format_score;
use serde::Serialize;
use std::fmt::Write;

/// Everything reported about one run
#[derive(Debug, Serialize)]
pub struct SummaryReport<'a> {
    #[serde(flatten)]
    pub summary: &'a Summary,
    pub cutoff: Cutoff,
    pub retained_columns: usize,
    pub dropped_columns: usize,
}

impl<'a> SummaryReport<'a> {
    pub fn new(summary: &'a Summary, cutoff: Cutoff, retained_columns: usize) -> Self {
        Self {
            summary,
            cutoff,
            retained_columns,
            dropped_columns: summary.total_columns.saturating_sub(retained_columns),
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str("PhyloP Score Summary\n");
        out.push_str("====================\n");

        for category in &self.summary.categories {
            let label = capitalize(&category.range.label);
            // String formatting cannot fail
            let _ = writeln!(
                out,
                "{} range: {} to {}",
                label,
                format_score(category.range.min),
                format_score(category.range.max)
            );
            let _ = writeln!(out, "{} count: {}", label, category.count);
            out.push('\n');
        }

        out.push_str("Filter\n");
        out.push_str("------\n");
        let _ = writeln!(
            out,
            "Cutoff range: {} to {}",
            format_score(self.cutoff.min),
            format_score(self.cutoff.max)
        );
        let _ = writeln!(out, "Total columns: {}", self.summary.total_columns);
        let _ = writeln!(out, "Retained columns: {}", self.retained_columns);
        let _ = writeln!(out, "Dropped columns: {}", self.dropped_columns);
        out
    }

    pub fn render_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PipelineError::Encode(format!("summary: {}", e)))
    }
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{classify, CategoryRange};
    use crate::data::ScoreSeries;

    fn summary() -> Summary {
        let scores = ScoreSeries::new(vec![2.0, 0.2, -2.0, 0.49]);
        classify(&scores, &CategoryRange::defaults())
    }

    #[test]
    fn test_render_text() {
        let summary = summary();
        let report = SummaryReport::new(&summary, Cutoff::default(), 2);
        let expected = "\
PhyloP Score Summary
====================
Conserved range: 1.5 to 3.0
Conserved count: 1

Neutral range: -0.5 to 0.5
Neutral count: 2

Accelerated range: -3.0 to -1.5
Accelerated count: 1

Filter
------
Cutoff range: -0.5 to 0.5
Total columns: 4
Retained columns: 2
Dropped columns: 2
";
        assert_eq!(report.render_text(), expected);
    }

    #[test]
    fn test_render_json() {
        let summary = summary();
        let report = SummaryReport::new(&summary, Cutoff::default(), 2);
        let value: serde_json::Value = serde_json::from_str(&report.render_json().unwrap()).unwrap();

        assert_eq!(value["total_columns"], 4);
        assert_eq!(value["retained_columns"], 2);
        assert_eq!(value["dropped_columns"], 2);
        assert_eq!(value["score_max"], 2.0);
        assert_eq!(value["categories"][1]["label"], "neutral");
        assert_eq!(value["categories"][1]["count"], 2);
        assert_eq!(value["cutoff"]["min"], -0.5);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("conserved"), "Conserved");
        assert_eq!(capitalize(""), "");
    }
}
