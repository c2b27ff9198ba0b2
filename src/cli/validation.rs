// validation.rs - Input validation utilities

use crate::cli::args::*;
use crate::core::{CategoryRange, Cutoff, PipelineConfig};
use crate::data::RecordFilter;
use crate::output::{SummaryFormat, TableFormat};
use regex::Regex;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::str::FromStr;

/// Validate all command line arguments and build the run configuration
pub fn validate_args(args: &Args) -> Result<PipelineConfig, String> {
    let alignment = args.alignment.as_ref().ok_or("--alignment is required")?;
    let output_dir = args.output_dir.as_ref().ok_or("--output-dir is required")?;

    // Scores are not read when only stripping reference gaps
    let scores = if args.strip_only {
        if args.gap_reference.is_none() {
            return Err("--strip-only requires --gap-reference".to_string());
        }
        args.scores.clone().unwrap_or_default()
    } else {
        args.scores.clone().ok_or("--scores is required")?
    };

    let cutoff = Cutoff::new(
        args.min_cutoff.unwrap_or(DEFAULT_MIN_CUTOFF),
        args.max_cutoff.unwrap_or(DEFAULT_MAX_CUTOFF),
    );
    check_interval("cutoff", cutoff.min, cutoff.max)?;

    let ranges = vec![
        CategoryRange::new(
            "conserved",
            args.conserved_min.unwrap_or(DEFAULT_CONSERVED_MIN),
            args.conserved_max.unwrap_or(DEFAULT_CONSERVED_MAX),
        ),
        CategoryRange::new(
            "neutral",
            args.neutral_min.unwrap_or(DEFAULT_NEUTRAL_MIN),
            args.neutral_max.unwrap_or(DEFAULT_NEUTRAL_MAX),
        ),
        CategoryRange::new(
            "accelerated",
            args.accelerated_min.unwrap_or(DEFAULT_ACCELERATED_MIN),
            args.accelerated_max.unwrap_or(DEFAULT_ACCELERATED_MAX),
        ),
    ];
    for range in &ranges {
        check_interval(&range.label, range.min, range.max)?;
    }

    let table_format = TableFormat::from_str(&args.format)?;
    let summary_format = SummaryFormat::from_str(&args.summary_format)?;

    // Compile regex patterns
    let include = if let Some(pattern) = &args.include_records {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid include_records regex: {}", e))?)
    } else {
        None
    };

    let exclude = if let Some(pattern) = &args.exclude_records {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid exclude_records regex: {}", e))?)
    } else {
        None
    };

    // Load record list from file
    let keep = if let Some(file_path) = &args.records_list {
        Some(load_set_from_file(file_path)?)
    } else {
        None
    };

    let mut config = PipelineConfig::new(alignment, scores, output_dir);
    config.cutoff = cutoff;
    config.ranges = ranges;
    config.gap_reference = args.gap_reference.clone();
    config.records = RecordFilter {
        include,
        exclude,
        keep,
    };
    config.table_format = table_format;
    config.summary_format = summary_format;
    config.dry_run = args.dry_run;
    config.strip_only = args.strip_only;
    Ok(config)
}

/// Parse the `--log-level` value
pub fn parse_log_level(level: &str) -> Result<log::Level, String> {
    log::Level::from_str(level).map_err(|_| {
        format!(
            "Invalid log level '{}'. Use: error, warn, info, debug, trace",
            level
        )
    })
}

fn check_interval(name: &str, min: f64, max: f64) -> Result<(), String> {
    if !min.is_finite() || !max.is_finite() {
        return Err(format!("{} range bounds must be finite numbers", name));
    }
    if min > max {
        return Err(format!(
            "{} range is empty: minimum {} is greater than maximum {}",
            name, min, max
        ));
    }
    Ok(())
}

/// Load a set of strings from a file (one per line)
fn load_set_from_file(file_path: &str) -> Result<HashSet<String>, String> {
    let file = File::open(file_path)
        .map_err(|e| format!("Failed to open records file '{}': {}", file_path, e))?;

    let reader = BufReader::new(file);
    let mut set = HashSet::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| {
            format!(
                "Failed to read line {} from '{}': {}",
                line_num + 1,
                file_path,
                e
            )
        })?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            set.insert(trimmed.to_string());
        }
    }

    log::info!("📋 Loaded {} records from '{}'", set.len(), file_path);
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn base_args() -> Args {
        Args {
            alignment: Some("aln.fasta".to_string()),
            scores: Some("scores.txt".to_string()),
            output_dir: Some("out".to_string()),
            ..Args::default()
        }
    }

    #[test]
    fn test_defaults_validate() {
        let config = validate_args(&base_args()).unwrap();
        assert_eq!(config.cutoff, Cutoff::new(-0.5, 0.5));
        assert_eq!(config.ranges, CategoryRange::defaults());
        assert_eq!(config.table_format, TableFormat::Csv);
        assert_eq!(config.summary_format, SummaryFormat::Text);
        assert!(config.records.is_empty());
    }

    #[test]
    fn test_required_inputs() {
        let args = Args {
            scores: None,
            ..base_args()
        };
        assert!(validate_args(&args).unwrap_err().contains("--scores"));

        let args = Args {
            alignment: None,
            ..base_args()
        };
        assert!(validate_args(&args).unwrap_err().contains("--alignment"));
    }

    #[test]
    fn test_strip_only_needs_reference_not_scores() {
        let args = Args {
            scores: None,
            strip_only: true,
            ..base_args()
        };
        assert!(validate_args(&args).is_err());

        let args = Args {
            scores: None,
            strip_only: true,
            gap_reference: Some("Bos_taurus".to_string()),
            ..base_args()
        };
        let config = validate_args(&args).unwrap();
        assert!(config.strip_only);
        assert_eq!(config.gap_reference.as_deref(), Some("Bos_taurus"));
    }

    #[test]
    fn test_inverted_interval_rejected() {
        let args = Args {
            min_cutoff: Some(1.0),
            max_cutoff: Some(-1.0),
            ..base_args()
        };
        assert!(validate_args(&args).unwrap_err().contains("cutoff"));

        let args = Args {
            neutral_max: Some(f64::NAN),
            ..base_args()
        };
        assert!(validate_args(&args).unwrap_err().contains("neutral"));
    }

    #[test]
    fn test_invalid_formats_and_regex() {
        let args = Args {
            format: "xlsx".to_string(),
            ..base_args()
        };
        assert!(validate_args(&args).is_err());

        let args = Args {
            include_records: Some("([".to_string()),
            ..base_args()
        };
        assert!(validate_args(&args)
            .unwrap_err()
            .contains("include_records"));
    }

    #[test]
    fn test_records_list_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Bos_taurus\n\n  Ovis_aries  ").unwrap();
        let args = Args {
            records_list: Some(file.path().to_string_lossy().to_string()),
            ..base_args()
        };
        let config = validate_args(&args).unwrap();
        let keep = config.records.keep.unwrap();
        assert_eq!(keep.len(), 2);
        assert!(keep.contains("Ovis_aries"));
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("debug"), Ok(log::Level::Debug));
        assert_eq!(parse_log_level("INFO"), Ok(log::Level::Info));
        assert!(parse_log_level("loud").is_err());
    }
}
