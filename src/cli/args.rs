//! CLI argument definitions for `degreeaudit`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use degree_audit::config::ConfigOverrides;
use logger::Level;

/// CLI log level argument
///
/// Displays as the lowercase name stored in config files.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `catalog`, `reports_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Audit a student's transcript.
    ///
    /// Reads `first.csv`, `second.csv` and `third.csv` from the transcript
    /// directory, computes GPA, degree eligibility and class, and writes a report.
    Audit {
        /// Directory holding the yearly enrollment CSV sheets
        #[arg(value_name = "TRANSCRIPT_DIR")]
        transcript_dir: PathBuf,

        /// Catalog TOML file (defaults to config `catalog`)
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,

        /// Output directory (defaults to config `reports_dir`/<student>)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Report format: csv, or markdown (md)
        #[arg(short, long, value_name = "FORMAT", default_value = "csv")]
        format: String,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "degreeaudit",
    about = "GPA, degree eligibility and honors classification from a student transcript",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config default catalog file
    #[arg(long = "config-catalog", value_name = "FILE")]
    pub config_catalog: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `--reports-dir` takes precedence over `--config-reports-dir` when both
    /// are provided. `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self.config_log_file.as_deref().map(path_string),
            verbose: self.config_verbose,
            catalog: self.config_catalog.as_deref().map(path_string),
            reports_dir: self
                .reports_dir
                .as_deref()
                .or(self.config_reports_dir.as_deref())
                .map(path_string),
        }
    }
}
