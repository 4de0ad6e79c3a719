//! Command-line interface entry point for `GpaTracker`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use gpa_tracker::config::Config;
use gpa_tracker::info;
use gpa_tracker::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
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

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
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

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Scales => commands::scales::run(),
        Command::Calc { courses, scale } => {
            commands::calc::run(&courses, scale.as_deref(), &config);
        }
        Command::Report {
            input_file,
            scale,
            select,
            format,
            output,
            title,
        } => {
            let options = commands::report::ReportOptions {
                input_file: &input_file,
                scale: scale.as_deref(),
                select: &select,
                format: &format,
                output: output.as_deref(),
                title: &title,
            };
            commands::report::run(&options, &config);
        }
        Command::Session { scale } => {
            commands::session::run(scale.as_deref(), &config);
        }
    }
}
