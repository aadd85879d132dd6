//! Depth scanner entry point.

use clap::Parser;
use depthscan::cli::Cli;
use depthscan::config::{AppConfig, LoadedConfig};
use depthscan::{DepthCamera, ScanError};
use logging::Logger;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(loaded) = load_config(&cli) else {
        return ExitCode::FAILURE;
    };
    let Some(logger) = initialize_logger(&loaded.config) else {
        return ExitCode::FAILURE;
    };
    report_config(&loaded, &logger);

    let code = scan(&loaded.config, &logger);

    // The log file may be the only sink; flush it before exit.
    logger.shutdown();
    code
}

/// Loads the configuration file, then applies command line overrides
fn load_config(cli: &Cli) -> Option<LoadedConfig> {
    match AppConfig::load(cli.config.as_deref()) {
        Ok(mut loaded) => {
            cli.apply(&mut loaded.config);
            Some(loaded)
        }
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            None
        }
    }
}

/// Initializes the main logger from configuration
fn initialize_logger(config: &AppConfig) -> Option<Logger> {
    match Logger::with_sinks(config.log_path.as_deref(), config.log_level, config.console_output) {
        Ok(logger) => Some(logger.for_component("Main")),
        Err(e) => {
            eprintln!("Failed to initialize logger: {}", ScanError::from(e));
            None
        }
    }
}

fn report_config(loaded: &LoadedConfig, logger: &Logger) {
    match &loaded.source {
        Some(path) => logger.info(&format!("Loaded configuration from: {}", path.display())),
        None => logger.info("No configuration file found, using defaults"),
    }
    for warning in &loaded.warnings {
        logger.warn(warning);
    }
}

/// Builds the scanner and runs it to completion. The scanner is dropped
/// before returning.
fn scan(config: &AppConfig, logger: &Logger) -> ExitCode {
    let scanner = config
        .scanner_options()
        .and_then(|options| DepthCamera::new(options, logger));
    let mut scanner = match scanner {
        Ok(scanner) => scanner,
        Err(e) => {
            logger.error(&format!("Failed to start depth scanner: {}", e));
            return ExitCode::FAILURE;
        }
    };
    logger.debug(&scanner.to_string());

    if scanner.run().is_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
