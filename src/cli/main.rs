//! Command-line interface entry point for `degreeaudit`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use degree_audit::config::Config;
use logger::{enable_debug, enable_verbose, info, init_file_logging, set_level, Level};
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    // Config file first, then this run's CLI overrides
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    init_logging(&args, &config);

    let succeeded = match args.command {
        Command::Config { subcommand } => commands::config::run(subcommand, &mut config, &defaults),
        Command::Audit {
            transcript_dir,
            catalog,
            output,
            format,
        } => {
            let request = commands::audit::AuditRequest {
                transcript_dir: &transcript_dir,
                catalog: catalog.as_deref(),
                output: output.as_deref(),
                format: &format,
            };
            commands::audit::run(&request, &config)
        }
    };

    if !succeeded {
        std::process::exit(1);
    }
}

/// Apply level, debug, verbose and file sink settings to the global logger.
///
/// `--log-level` beats the config level, which beats the `warn` fallback.
fn init_logging(args: &Cli, config: &Config) {
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse::<Level>().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    let config_log_path = (!config.logging.file.is_empty())
        .then(|| PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.display();
        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }
}
