//! disha-nav - navigation and direction-reporting daemon for a small ground robot

use disha_nav::app::NavApp;
use disha_nav::config::AppConfig;
use disha_nav::error::{Error, Result};
use std::env;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Parse config path from command line arguments.
///
/// Supports:
/// - `disha-nav <path>` (positional)
/// - `disha-nav --config <path>` (flag-based)
/// - `disha-nav -c <path>` (short flag)
///
/// Defaults to `disha-nav.toml` if not specified.
fn parse_config_path() -> String {
    let args: Vec<String> = env::args().collect();

    // Look for --config or -c flag
    for i in 1..args.len() {
        if (args[i] == "--config" || args[i] == "-c") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }

    // Fall back to first positional argument (if it doesn't start with -)
    if args.len() > 1 && !args[1].starts_with('-') {
        return args[1].clone();
    }

    // Default path
    "disha-nav.toml".to_string()
}

fn main() -> Result<()> {
    let config_path = parse_config_path();
    let (config, config_missing) = if Path::new(&config_path).exists() {
        (AppConfig::from_file(&config_path)?, false)
    } else {
        (AppConfig::default(), true)
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&config.logging.level),
    )
    .init();

    log::info!("disha-nav v{} starting...", env!("CARGO_PKG_VERSION"));
    if config_missing {
        log::warn!(
            "Config file {} not found, using simulation defaults",
            config_path
        );
    } else {
        log::info!("Using config: {}", config_path);
    }

    // Set up shutdown signal handler
    let shutdown = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&shutdown);

    ctrlc::set_handler(move || {
        log::info!("Received shutdown signal");
        flag.store(true, Ordering::Relaxed);
    })
    .map_err(|e| Error::Other(format!("Error setting Ctrl-C handler: {}", e)))?;

    let app = NavApp::new(config, shutdown);
    app.run()?;

    log::info!("disha-nav stopped");
    Ok(())
}
