// mod.rs - Output formatters and artifact writer

pub mod encode;
pub mod summary;

use crate::error::{PipelineError, Result};
use std::fs::{self, create_dir_all};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub use encode::{encode_fasta, encode_table, format_score, SCORE_LABEL};
pub use summary::SummaryReport;

pub const PRE_FILTER_STEM: &str = "alignment_pre_filter";
pub const FILTERED_STEM: &str = "alignment_filtered";
pub const FILTERED_FASTA: &str = "alignment_filtered.fasta";
pub const GAPS_REMOVED_FASTA: &str = "alignment_gaps_removed.fasta";
pub const SUMMARY_STEM: &str = "score_summary";

const PARTIAL_SUFFIX: &str = ".partial";

/// Delimited table layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableFormat {
    #[default]
    Csv,
    Tsv,
}

impl FromStr for TableFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(TableFormat::Csv),
            "tsv" => Ok(TableFormat::Tsv),
            _ => Err(format!("Unsupported table format: {}. Use: csv, tsv", s)),
        }
    }
}

impl TableFormat {
    pub fn delimiter(&self) -> u8 {
        match self {
            TableFormat::Csv => b',',
            TableFormat::Tsv => b'\t',
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            TableFormat::Csv => "csv",
            TableFormat::Tsv => "tsv",
        }
    }
}

/// Summary report layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for SummaryFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(SummaryFormat::Text),
            "json" => Ok(SummaryFormat::Json),
            _ => Err(format!("Unsupported summary format: {}. Use: text, json", s)),
        }
    }
}

impl SummaryFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            SummaryFormat::Text => "txt",
            SummaryFormat::Json => "json",
        }
    }
}

/// A fully encoded output file, not yet on disk
#[derive(Debug, Clone)]
pub struct Artifact {
    pub file_name: String,
    pub contents: Vec<u8>,
}

impl Artifact {
    pub fn new(file_name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            contents: contents.into(),
        }
    }
}

fn partial_path(final_path: &Path) -> PathBuf {
    let mut name = final_path.as_os_str().to_os_string();
    name.push(PARTIAL_SUFFIX);
    PathBuf::from(name)
}

fn remove_all(paths: &[PathBuf]) {
    for path in paths {
        if let Err(e) = fs::remove_file(path) {
            log::warn!("⚠️  Failed to remove '{}': {}", path.display(), e);
        }
    }
}

/// Write every artifact into `dir`, all or nothing.
///
/// Artifacts go to `*.partial` siblings first and are renamed into place only
/// once all of them were written. On failure nothing from this call is left
/// behind.
pub fn write_artifacts(dir: &Path, artifacts: &[Artifact]) -> Result<Vec<PathBuf>> {
    create_dir_all(dir).map_err(|e| PipelineError::io(dir, e))?;

    let mut partials = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let partial = partial_path(&dir.join(&artifact.file_name));
        if let Err(e) = fs::write(&partial, &artifact.contents) {
            // A failed write may still have created the file
            if partial.exists() {
                partials.push(partial.clone());
            }
            remove_all(&partials);
            return Err(PipelineError::io(partial, e));
        }
        partials.push(partial);
    }

    let mut published = Vec::with_capacity(artifacts.len());
    for (index, artifact) in artifacts.iter().enumerate() {
        let final_path = dir.join(&artifact.file_name);
        if let Err(e) = fs::rename(&partials[index], &final_path) {
            remove_all(&published);
            remove_all(&partials[index..]);
            return Err(PipelineError::io(final_path, e));
        }
        log::info!("✅ Written: {}", final_path.display());
        published.push(final_path);
    }

    Ok(published)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_format_from_str() {
        assert_eq!("csv".parse::<TableFormat>(), Ok(TableFormat::Csv));
        assert_eq!("TSV".parse::<TableFormat>(), Ok(TableFormat::Tsv));
        assert!("phylip".parse::<TableFormat>().is_err());
        assert_eq!(TableFormat::Tsv.delimiter(), b'\t');
    }

    #[test]
    fn test_summary_format_from_str() {
        assert_eq!("text".parse::<SummaryFormat>(), Ok(SummaryFormat::Text));
        assert_eq!("json".parse::<SummaryFormat>(), Ok(SummaryFormat::Json));
        assert!("yaml".parse::<SummaryFormat>().is_err());
    }

    #[test]
    fn test_write_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("out");
        let written = write_artifacts(
            &out,
            &[Artifact::new("a.txt", "one"), Artifact::new("b.txt", "two")],
        )
        .unwrap();

        assert_eq!(written.len(), 2);
        assert_eq!(fs::read_to_string(out.join("a.txt")).unwrap(), "one");
        assert_eq!(fs::read_to_string(out.join("b.txt")).unwrap(), "two");
        assert!(!out.join("a.txt.partial").exists());
    }

    #[test]
    fn test_write_artifacts_leaves_nothing_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        // second artifact targets a directory that does not exist
        let result = write_artifacts(
            dir.path(),
            &[
                Artifact::new("a.txt", "one"),
                Artifact::new("missing/b.txt", "two"),
            ],
        );

        assert!(matches!(result, Err(PipelineError::Io { .. })));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
