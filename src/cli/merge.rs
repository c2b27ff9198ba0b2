// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

/// Take the config value only when the option was not given on the CLI
fn merge_f64(cli: &mut Option<f64>, config: Option<f64>) {
    if cli.is_none() {
        *cli = config;
    }
}

fn merge_string(cli: &mut String, default: &str, config: Option<String>) {
    if cli.as_str() == default {
        if let Some(value) = config {
            *cli = value;
        }
    }
}

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.alignment.is_none() {
            self.alignment = config.alignment;
        }
        if self.scores.is_none() {
            self.scores = config.scores;
        }
        if self.output_dir.is_none() {
            self.output_dir = config.output_dir;
        }
        merge_string(&mut self.format, "csv", config.format);
        merge_string(&mut self.summary_format, "text", config.summary_format);

        // Cutoff and ranges (only where the option was not given)
        merge_f64(&mut self.min_cutoff, config.min_cutoff);
        merge_f64(&mut self.max_cutoff, config.max_cutoff);
        merge_f64(&mut self.conserved_min, config.conserved_min);
        merge_f64(&mut self.conserved_max, config.conserved_max);
        merge_f64(&mut self.neutral_min, config.neutral_min);
        merge_f64(&mut self.neutral_max, config.neutral_max);
        merge_f64(&mut self.accelerated_min, config.accelerated_min);
        merge_f64(&mut self.accelerated_max, config.accelerated_max);

        // Record selection
        if self.gap_reference.is_none() {
            self.gap_reference = config.gap_reference;
        }
        if self.include_records.is_none() {
            self.include_records = config.include_records;
        }
        if self.exclude_records.is_none() {
            self.exclude_records = config.exclude_records;
        }
        if self.records_list.is_none() {
            self.records_list = config.records_list;
        }

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.strip_only && config.strip_only.unwrap_or(false) {
            self.strip_only = true;
        }
        if !self.dry_run && config.dry_run.unwrap_or(false) {
            self.dry_run = true;
        }
        merge_string(&mut self.log_level, "info", config.log_level);

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}
