//! Report command handler
//!
//! Loads a transcript, applies the requested scale and chart selection, and
//! renders the summary as text, Markdown or HTML.

use gpa_tracker::config::Config;
use gpa_tracker::core::error::GpaError;
use gpa_tracker::core::report::{generator_for, ReportContext, ReportFormat};
use gpa_tracker::core::session::Session;
use gpa_tracker::core::transcript::Transcript;
use gpa_tracker::{error, info, verbose};
use std::path::{Path, PathBuf};

/// Options for a single report run
pub struct ReportOptions<'a> {
    /// Transcript to load
    pub input_file: &'a Path,
    /// Scale to re-read the history under, if any
    pub scale: Option<&'a str>,
    /// History indices to chart
    pub select: &'a [usize],
    /// Output format name
    pub format: &'a str,
    /// Explicit output path
    pub output: Option<&'a Path>,
    /// Report heading
    pub title: &'a str,
}

/// Run the report command, exiting non-zero on failure.
pub fn run(options: &ReportOptions, config: &Config) {
    match generate(options, config) {
        Ok(Some(path)) => println!("✓ Report generated: {}", path.display()),
        Ok(None) => {}
        Err(e) => {
            error!(
                "Report generation failed for {}: {e}",
                options.input_file.display()
            );
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

/// Build the session a report is rendered from
///
/// # Errors
/// Fails if the transcript cannot be loaded, a scale is unknown, or a
/// selected index does not exist.
pub fn prepare_session(options: &ReportOptions, config: &Config) -> Result<Session, GpaError> {
    let transcript = Transcript::load(options.input_file)?;
    let mut session = transcript.into_session(config.default_scale())?;

    if let Some(scale) = options.scale {
        session.set_scale(scale.parse()?);
    }
    for &index in options.select {
        session.toggle_chart_selection(index)?;
    }
    Ok(session)
}

/// Render the report; returns the written path, or `None` when printed to stdout
///
/// # Errors
/// Fails on an unknown format, invalid input, or a write error.
pub fn generate(options: &ReportOptions, config: &Config) -> Result<Option<PathBuf>, GpaError> {
    let format: ReportFormat = options.format.parse().map_err(GpaError::Report)?;
    let session = prepare_session(options, config)?;
    verbose!(
        "Loaded {} semester(s) from {} on the {} scale",
        session.history().len(),
        options.input_file.display(),
        session.scale()
    );

    let summary = session.summary();
    let chart = session.chart();
    let ctx = ReportContext::new(options.title, &summary, chart.as_ref());
    let generator = generator_for(format);

    let output_path = match (options.output, format) {
        (Some(path), _) => path.to_path_buf(),
        (None, ReportFormat::Text) => {
            print!("{}", generator.render(&ctx)?);
            return Ok(None);
        }
        (None, _) => default_output_path(options.input_file, format, config),
    };

    generator.generate(&ctx, &output_path)?;
    info!("Wrote {format} report to {}", output_path.display());
    Ok(Some(output_path))
}

/// `<reports_dir>/<transcript stem>_report.<ext>`
fn default_output_path(input_file: &Path, format: ReportFormat, config: &Config) -> PathBuf {
    let stem = input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("transcript");
    let dir = if config.paths.reports_dir.is_empty() {
        PathBuf::from(".")
    } else {
        PathBuf::from(&config.paths.reports_dir)
    };
    dir.join(format!("{stem}_report.{}", format.extension()))
}
