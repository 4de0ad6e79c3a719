//! CLI argument definitions for `GpaTracker`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gpa_tracker::config::ConfigOverrides;
use gpa_tracker::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `Level` for
/// runtime use.
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
        /// Optional configuration key to display (e.g., `level`, `default_scale`)
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
    /// List the supported grading scales and their letter grades.
    Scales,
    /// Compute the GPA of a single term.
    ///
    /// Each course is given as UNITS:GRADE, e.g. `3:A 4:B+ 1.5:C`.
    Calc {
        /// Courses as UNITS:GRADE pairs
        #[arg(value_name = "COURSE", num_args = 1..)]
        courses: Vec<String>,

        /// Grading scale (4.0, 5.0, 7.0, 10.0); defaults to config `default_scale`
        #[arg(short, long, value_name = "SCALE")]
        scale: Option<String>,
    },
    /// Summarise a transcript file and optionally write a report.
    ///
    /// Loads semesters from a TOML transcript, computes every GPA and the
    /// CGPA, and renders them as text, Markdown or HTML.
    Report {
        /// Path to the transcript TOML file
        #[arg(value_name = "FILE")]
        input_file: PathBuf,

        /// Re-read every semester under this scale instead of the transcript's own
        #[arg(short, long, value_name = "SCALE")]
        scale: Option<String>,

        /// History indices to plot in the trend chart (e.g. `0,1,3`)
        #[arg(long, value_name = "INDICES", value_delimiter = ',')]
        select: Vec<usize>,

        /// Report format: text, markdown (md), or html
        #[arg(short, long, value_name = "FORMAT", default_value = "text")]
        format: String,

        /// Output file path (text prints to stdout when omitted; other
        /// formats default to the configured reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report heading
        #[arg(long, value_name = "TITLE", default_value = "GPA Report")]
        title: String,
    },
    /// Start an interactive session driven by commands on stdin.
    ///
    /// Type `help` inside the session for the list of commands.
    Session {
        /// Starting grading scale; defaults to config `default_scale`
        #[arg(short, long, value_name = "SCALE")]
        scale: Option<String>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gpatracker",
    about = "GPA and CGPA calculator with honours classification",
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
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config default grading scale
    #[arg(long = "config-default-scale", value_name = "SCALE")]
    pub config_default_scale: Option<String>,

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

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--reports-dir`) take precedence over
    /// long-form flags (e.g., `--config-reports-dir`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            default_scale: self.config_default_scale.clone(),
            reports_dir: self
                .reports_dir
                .as_ref()
                .or(self.config_reports_dir.as_ref())
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli(command: Command) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_default_scale: None,
            config_reports_dir: None,
            reports_dir: None,
            command,
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare_cli(Command::Scales).to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.default_scale.is_none());
        assert!(overrides.reports_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut cli = bare_cli(Command::Config { subcommand: None });
        cli.config_level = Some(LogLevelArg::Debug);
        cli.config_log_file = Some(PathBuf::from("/tmp/test.log"));
        cli.config_verbose = Some(true);
        cli.config_default_scale = Some("7.0".to_string());
        cli.reports_dir = Some(PathBuf::from("/short/out"));
        cli.config_reports_dir = Some(PathBuf::from("/long/out"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.default_scale, Some("7.0".to_string()));
        assert_eq!(overrides.reports_dir, Some("/short/out".to_string()));
    }

    #[test]
    fn test_long_form_when_short_form_absent() {
        let mut cli = bare_cli(Command::Scales);
        cli.config_reports_dir = Some(PathBuf::from("/long/out"));
        assert_eq!(
            cli.to_config_overrides().reports_dir,
            Some("/long/out".to_string())
        );
    }

    #[test]
    fn test_parse_report_command() {
        let cli = Cli::try_parse_from([
            "gpatracker",
            "report",
            "grades.toml",
            "--select",
            "0,2",
            "-f",
            "md",
            "--scale",
            "5.0",
        ])
        .unwrap();
        match cli.command {
            Command::Report {
                input_file,
                select,
                format,
                scale,
                output,
                ..
            } => {
                assert_eq!(input_file, PathBuf::from("grades.toml"));
                assert_eq!(select, vec![0, 2]);
                assert_eq!(format, "md");
                assert_eq!(scale.as_deref(), Some("5.0"));
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_calc_command() {
        let cli = Cli::try_parse_from(["gpatracker", "calc", "3:A", "3:B", "-s", "4.0"]).unwrap();
        match cli.command {
            Command::Calc { courses, scale } => {
                assert_eq!(courses, vec!["3:A", "3:B"]);
                assert_eq!(scale.as_deref(), Some("4.0"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
