// pipeline.rs - Linear run: parse, validate, classify, filter, encode, write

use crate::core::classify::{CategoryRange, Summary};
use crate::core::join::{Cutoff, FilterJoin, FilteredView};
use crate::data::{AlignmentMatrix, RecordFilter, ScoreSeries};
use crate::error::Result;
use crate::output::{
    encode_fasta, encode_table, write_artifacts, Artifact, SummaryFormat, SummaryReport,
    TableFormat, FILTERED_FASTA, FILTERED_STEM, GAPS_REMOVED_FASTA, PRE_FILTER_STEM, SUMMARY_STEM,
};
use std::path::PathBuf;

/// Settings for one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub alignment: PathBuf,
    pub scores: PathBuf,
    pub output_dir: PathBuf,
    pub cutoff: Cutoff,
    pub ranges: Vec<CategoryRange>,
    /// Drop columns where this record has a gap before joining
    pub gap_reference: Option<String>,
    pub records: RecordFilter,
    pub table_format: TableFormat,
    pub summary_format: SummaryFormat,
    /// Run every gate but write nothing
    pub dry_run: bool,
    /// Only write the reference-gap-stripped alignment
    pub strip_only: bool,
}

impl PipelineConfig {
    pub fn new(
        alignment: impl Into<PathBuf>,
        scores: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            alignment: alignment.into(),
            scores: scores.into(),
            output_dir: output_dir.into(),
            cutoff: Cutoff::default(),
            ranges: CategoryRange::defaults(),
            gap_reference: None,
            records: RecordFilter::default(),
            table_format: TableFormat::default(),
            summary_format: SummaryFormat::default(),
            dry_run: false,
            strip_only: false,
        }
    }
}

/// What a successful run produced
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    /// None when only the gap-stripped alignment was written
    pub summary: Option<Summary>,
    pub total_columns: usize,
    pub retained_columns: usize,
    pub written: Vec<PathBuf>,
}

/// Encode the four run artifacts from one filtered view
pub fn build_artifacts(
    matrix: &AlignmentMatrix,
    scores: &ScoreSeries,
    view: &FilteredView,
    summary: &Summary,
    config: &PipelineConfig,
) -> Result<Vec<Artifact>> {
    let table_ext = config.table_format.extension();
    let report = SummaryReport::new(summary, config.cutoff, view.retained_count());
    let report = match config.summary_format {
        SummaryFormat::Text => report.render_text(),
        SummaryFormat::Json => report.render_json()?,
    };

    Ok(vec![
        Artifact::new(
            format!("{}.{}", PRE_FILTER_STEM, table_ext),
            encode_table(matrix, scores, config.table_format)?,
        ),
        Artifact::new(
            format!("{}.{}", FILTERED_STEM, table_ext),
            encode_table(&view.matrix, &view.scores, config.table_format)?,
        ),
        Artifact::new(FILTERED_FASTA, encode_fasta(&view.matrix)?),
        Artifact::new(
            format!("{}.{}", SUMMARY_STEM, config.summary_format.extension()),
            report,
        ),
    ])
}

/// Run the whole pipeline. Any failing gate ends the run before anything is
/// written.
pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineOutcome> {
    log::info!("🚀 Starting run");

    let matrix = AlignmentMatrix::from_file(&config.alignment)?;
    let matrix = config.records.apply(&matrix)?;
    let matrix = match &config.gap_reference {
        Some(reference) => matrix.strip_reference_gaps(reference)?,
        None => matrix,
    };

    if config.strip_only {
        let artifacts = vec![Artifact::new(GAPS_REMOVED_FASTA, encode_fasta(&matrix)?)];
        let written = if config.dry_run {
            Vec::new()
        } else {
            write_artifacts(&config.output_dir, &artifacts)?
        };
        return Ok(PipelineOutcome {
            summary: None,
            total_columns: matrix.column_count(),
            retained_columns: matrix.column_count(),
            written,
        });
    }

    let scores = ScoreSeries::from_file(&config.scores)?;

    let join = FilterJoin::bind(&matrix, &scores)?;
    log::info!(
        "🔗 Joined {} columns × {} records",
        matrix.column_count(),
        matrix.record_count()
    );

    let (view, summary) = join.run(config.cutoff, &config.ranges);
    for category in &summary.categories {
        log::info!("📊 {}: {}", category.range.label, category.count);
    }

    let artifacts = build_artifacts(&matrix, &scores, &view, &summary, config)?;

    let written = if config.dry_run {
        log::info!(
            "✅ Dry run completed: {} artifacts encoded, nothing written",
            artifacts.len()
        );
        Vec::new()
    } else {
        write_artifacts(&config.output_dir, &artifacts)?
    };

    log::info!("🎉 Run completed successfully");
    Ok(PipelineOutcome {
        summary: Some(summary),
        total_columns: matrix.column_count(),
        retained_columns: view.retained_count(),
        written,
    })
}
