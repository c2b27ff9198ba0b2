// main.rs - CLI entry point

use phylofilt::cli::{parse_log_level, Config};
use phylofilt::prelude::*;
use std::time::Instant;

fn main() {
    if let Err(e) = run_main() {
        // Argument and config errors can happen before the logger is up
        if log::log_enabled!(log::Level::Error) {
            log::error!("❌ {}", e);
        } else {
            eprintln!("❌ ERROR: {}", e);
        }
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    let level = parse_log_level(&args.log_level)?;
    simple_logger::init_with_level(level)
        .map_err(|e| format!("Failed to initialise logger: {}", e))?;

    log::info!("🚀 {}", phylofilt::get_info());
    if let Some(config_path) = &args.config {
        log::info!("📄 Loaded configuration from: {}", config_path);
    }

    let config = validate_args(&args)?;
    let total_start = Instant::now();

    let outcome = run_pipeline(&config).map_err(|e| format!("[{}] {}", e.gate(), e))?;

    if let Some(summary) = &outcome.summary {
        log::info!(
            "📊 Final view: {} of {} columns retained",
            outcome.retained_columns,
            summary.total_columns
        );
    } else {
        log::info!(
            "📊 Gap-stripped alignment: {} columns",
            outcome.total_columns
        );
    }
    for path in &outcome.written {
        log::info!("📁 Output: {}", path.display());
    }
    log::info!(
        "⏱️  Total execution time: {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}
