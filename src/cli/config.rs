// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub alignment: Option<String>,
    pub scores: Option<String>,
    pub output_dir: Option<String>,
    pub format: Option<String>,
    pub summary_format: Option<String>,

    // Filtering cutoff
    pub min_cutoff: Option<f64>,
    pub max_cutoff: Option<f64>,

    // Category ranges
    pub conserved_min: Option<f64>,
    pub conserved_max: Option<f64>,
    pub neutral_min: Option<f64>,
    pub neutral_max: Option<f64>,
    pub accelerated_min: Option<f64>,
    pub accelerated_max: Option<f64>,

    // Record selection
    pub gap_reference: Option<String>,
    pub include_records: Option<String>,
    pub exclude_records: Option<String>,
    pub records_list: Option<String>,

    // Flags
    pub strip_only: Option<bool>,
    pub dry_run: Option<bool>,
    pub log_level: Option<String>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        Self::from_toml(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))
    }

    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# phylofilt.toml - Configuration file for phylofilt
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Path to the input FASTA alignment
alignment = "/path/to/alignment.fasta"

# Path to the score file (one score per alignment column)
scores = "/path/to/phyloP_scores.txt"

# Directory to save output files
output_dir = "results"

# Tabular output format: csv, tsv
format = "csv"

# Summary report format: text, json
summary_format = "text"

# =============================================================================
# FILTERING CUTOFF
# =============================================================================

# Columns with min_cutoff <= score <= max_cutoff are retained
min_cutoff = -0.5
max_cutoff = 0.5

# =============================================================================
# CATEGORY RANGES (inclusive; may overlap)
# =============================================================================

conserved_min = 1.5
conserved_max = 3.0

neutral_min = -0.5
neutral_max = 0.5

accelerated_min = -3.0
accelerated_max = -1.5

# =============================================================================
# RECORD SELECTION
# =============================================================================

# Remove columns where this record has a gap before joining scores
# gap_reference = "Bos_taurus"

# Include only records matching regex pattern
# include_records = "^Bos_.*"

# Exclude records matching regex pattern
# exclude_records = "outgroup.*"

# Include only records listed in a file (one name per line)
# records_list = "records.txt"

# =============================================================================
# FLAGS
# =============================================================================

# Only write the gap-stripped alignment (requires gap_reference)
strip_only = false

# Validate inputs without writing output (dry run)
dry_run = false

# Log level: error, warn, info, debug, trace
log_level = "info"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_config_parses() {
        let config = Config::from_toml(&Config::generate_sample()).unwrap();
        assert_eq!(config.alignment.as_deref(), Some("/path/to/alignment.fasta"));
        assert_eq!(config.min_cutoff, Some(-0.5));
        assert_eq!(config.accelerated_max, Some(-1.5));
        assert_eq!(config.gap_reference, None);
        assert_eq!(config.dry_run, Some(false));
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phylofilt.toml");
        let config = Config {
            scores: Some("scores.txt".to_string()),
            max_cutoff: Some(1.25),
            ..Config::new()
        };
        config.to_file(&path).unwrap();
        assert_eq!(Config::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_config_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "min_cutoff = \"low\"\n").unwrap();
        let err = Config::from_file(&path).unwrap_err();
        assert!(err.contains("broken.toml"));
    }
}
