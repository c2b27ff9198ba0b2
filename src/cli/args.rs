// args.rs - Command line arguments definition

use argh::FromArgs;

pub const DEFAULT_MIN_CUTOFF: f64 = -0.5;
pub const DEFAULT_MAX_CUTOFF: f64 = 0.5;
pub const DEFAULT_CONSERVED_MIN: f64 = 1.5;
pub const DEFAULT_CONSERVED_MAX: f64 = 3.0;
pub const DEFAULT_NEUTRAL_MIN: f64 = -0.5;
pub const DEFAULT_NEUTRAL_MAX: f64 = 0.5;
pub const DEFAULT_ACCELERATED_MIN: f64 = -3.0;
pub const DEFAULT_ACCELERATED_MAX: f64 = -1.5;

// Numeric options stay `None` unless given on the command line, so a config
// file can fill them without overriding an explicit value.
#[derive(FromArgs)]
/// phylofilt - Annotate a FASTA alignment with per-column conservation scores and filter columns
pub struct Args {
    /// path to the input FASTA alignment
    #[argh(option)]
    pub alignment: Option<String>,

    /// path to the score file (one score per alignment column)
    #[argh(option)]
    pub scores: Option<String>,

    /// directory to save output files
    #[argh(option)]
    pub output_dir: Option<String>,

    /// minimum score for the filtering cutoff (default: -0.5)
    #[argh(option)]
    pub min_cutoff: Option<f64>,

    /// maximum score for the filtering cutoff (default: 0.5)
    #[argh(option)]
    pub max_cutoff: Option<f64>,

    /// minimum score for conserved sites (default: 1.5)
    #[argh(option)]
    pub conserved_min: Option<f64>,

    /// maximum score for conserved sites (default: 3.0)
    #[argh(option)]
    pub conserved_max: Option<f64>,

    /// minimum score for neutral sites (default: -0.5)
    #[argh(option)]
    pub neutral_min: Option<f64>,

    /// maximum score for neutral sites (default: 0.5)
    #[argh(option)]
    pub neutral_max: Option<f64>,

    /// minimum score for accelerated sites (default: -3.0)
    #[argh(option)]
    pub accelerated_min: Option<f64>,

    /// maximum score for accelerated sites (default: -1.5)
    #[argh(option)]
    pub accelerated_max: Option<f64>,

    /// remove every column where this reference record has a gap before joining scores
    #[argh(option)]
    pub gap_reference: Option<String>,

    /// only write the reference-gap-stripped alignment, then exit (requires --gap-reference)
    #[argh(switch)]
    pub strip_only: bool,

    /// include only records matching regex pattern
    #[argh(option)]
    pub include_records: Option<String>,

    /// exclude records matching regex pattern
    #[argh(option)]
    pub exclude_records: Option<String>,

    /// include only records listed in a file (one name per line); every name must exist
    #[argh(option)]
    pub records_list: Option<String>,

    /// tabular output format: csv, tsv (default: csv)
    #[argh(option, default = "String::from(\"csv\")")]
    pub format: String,

    /// summary report format: text, json (default: text)
    #[argh(option, default = "String::from(\"text\")")]
    pub summary_format: String,

    /// validate inputs and run every step without writing output
    #[argh(switch)]
    pub dry_run: bool,

    /// log level: error, warn, info, debug, trace (default: info)
    #[argh(option, default = "String::from(\"info\")")]
    pub log_level: String,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            alignment: None,
            scores: None,
            output_dir: None,
            min_cutoff: None,
            max_cutoff: None,
            conserved_min: None,
            conserved_max: None,
            neutral_min: None,
            neutral_max: None,
            accelerated_min: None,
            accelerated_max: None,
            gap_reference: None,
            strip_only: false,
            include_records: None,
            exclude_records: None,
            records_list: None,
            format: String::from("csv"),
            summary_format: String::from("text"),
            dry_run: false,
            log_level: String::from("info"),
            config: None,
            generate_config: false,
        }
    }
}
