//! Interactive session command handler
//!
//! Reads one command per line and applies it to a single in-memory
//! [`Session`]. Every command either applies fully or prints an error and
//! leaves the session untouched.

use gpa_tracker::config::Config;
use gpa_tracker::core::error::GpaError;
use gpa_tracker::core::models::CourseRow;
use gpa_tracker::core::report::{render_session, ReportFormat};
use gpa_tracker::core::scale::ScaleId;
use gpa_tracker::core::session::Session;
use gpa_tracker::shared::numeric::fmt2;
use gpa_tracker::{debug, error, info};
use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use super::resolve_scale;

const HELP: &str = "\
Commands:
  scale <4.0|5.0|7.0|10.0>     switch the grading scale
  add                          append a blank course row
  remove <row>                 remove a course row
  set <row> <units> <grade>    edit a course row
  course <units:grade>         fill the next course row
  rows                         list the course rows
  calc                         GPA of the current rows
  store <name>                 store the rows as a semester
  delete <index>               delete a stored semester
  toggle <index>               add/remove a semester from the chart
  show                         summary of the whole session
  chart                        trend of the selected semesters
  help                         this message
  quit                         leave the session";

/// One parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Switch the active scale
    Scale(String),
    /// Append a blank row
    Add,
    /// Remove a row
    Remove(usize),
    /// Edit a row
    Set {
        /// Row index
        row: usize,
        /// Units text
        units: String,
        /// Grade letter
        grade: String,
    },
    /// Fill the next row from a `UNITS:GRADE` pair
    Course(String),
    /// List rows
    Rows,
    /// Current GPA
    Calc,
    /// Store the rows under a name
    Store(String),
    /// Delete a stored semester
    Delete(usize),
    /// Flip chart membership
    Toggle(usize),
    /// Full summary
    Show,
    /// Trend series
    Chart,
    /// Command list
    Help,
    /// End the session
    Quit,
}

impl SessionCommand {
    /// Parse a single input line. Blank lines yield `Ok(None)`.
    ///
    /// # Errors
    /// Returns a message for an unknown command or missing arguments.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(w, r)| (w, r.trim()));

        let command = match word.to_ascii_lowercase().as_str() {
            "scale" => Self::Scale(required(rest, "scale")?.to_string()),
            "add" => Self::Add,
            "remove" | "rm" => Self::Remove(index_arg(rest, "remove")?),
            "set" => {
                let mut parts = rest.split_whitespace();
                let row = index_arg(parts.next().unwrap_or(""), "set")?;
                let (Some(units), Some(grade), None) = (parts.next(), parts.next(), parts.next())
                else {
                    return Err("usage: set <row> <units> <grade>".to_string());
                };
                Self::Set {
                    row,
                    units: units.to_string(),
                    grade: grade.to_string(),
                }
            }
            "course" => Self::Course(required(rest, "course")?.to_string()),
            "rows" => Self::Rows,
            "calc" | "gpa" => Self::Calc,
            "store" => Self::Store(rest.to_string()),
            "delete" | "del" => Self::Delete(index_arg(rest, "delete")?),
            "toggle" => Self::Toggle(index_arg(rest, "toggle")?),
            "show" | "summary" => Self::Show,
            "chart" => Self::Chart,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(format!("Unknown command '{other}' (type 'help')")),
        };
        Ok(Some(command))
    }
}

fn required<'a>(rest: &'a str, command: &str) -> Result<&'a str, String> {
    if rest.is_empty() {
        Err(format!("'{command}' needs an argument"))
    } else {
        Ok(rest)
    }
}

fn index_arg(rest: &str, command: &str) -> Result<usize, String> {
    required(rest, command)?
        .parse()
        .map_err(|_| format!("'{command}' expects a non-negative index, got '{rest}'"))
}

/// Apply a command and return the text to show the user
///
/// # Errors
/// Propagates the session's error; the session is unchanged in that case.
pub fn execute(session: &mut Session, command: &SessionCommand) -> Result<String, GpaError> {
    let output = match command {
        SessionCommand::Scale(id) => {
            let scale: ScaleId = id.parse()?;
            session.set_scale(scale);
            format!("Scale set to {scale} ({})", scale.letters().join(", "))
        }
        SessionCommand::Add => format!("Added row {}", session.add_course()),
        SessionCommand::Remove(row) => {
            session.remove_course(*row)?;
            format!("Removed row {row}")
        }
        SessionCommand::Set { row, units, grade } => {
            session.set_course(*row, units, grade)?;
            format!("Row {row}: {units} units, {grade}")
        }
        SessionCommand::Course(pair) => {
            let parsed = CourseRow::parse_pair(pair)?;
            let row = session.push_course(&parsed.units, &parsed.grade)?;
            format!("Row {row}: {} units, {}", parsed.units, parsed.grade)
        }
        SessionCommand::Rows => format_rows(session),
        SessionCommand::Calc => format!("GPA: {}", session.compute_current().display()),
        SessionCommand::Store(name) => {
            let index = session.store_semester(name)?;
            let cumulative = session.cumulative();
            format!(
                "Stored '{}' at index {index}. CGPA: {}",
                name.trim(),
                cumulative.display()
            )
        }
        SessionCommand::Delete(index) => {
            let removed = session.delete_semester(*index)?;
            format!(
                "Deleted '{}'. CGPA: {}",
                removed.name,
                session.cumulative().display()
            )
        }
        SessionCommand::Toggle(index) => {
            let selected = session.toggle_chart_selection(*index)?;
            let state = if selected { "selected" } else { "deselected" };
            format!(
                "Semester {index} {state}. Selected CGPA: {}",
                session.aggregate_selected().display()
            )
        }
        SessionCommand::Show => render_session(session, ReportFormat::Text, "Session")?
            .trim_end()
            .to_string(),
        SessionCommand::Chart => format_chart(session),
        SessionCommand::Help => HELP.to_string(),
        SessionCommand::Quit => String::new(),
    };
    Ok(output)
}

fn format_rows(session: &Session) -> String {
    let mut out = String::new();
    for (index, row) in session.rows().iter().enumerate() {
        let units = if row.units.is_empty() { "-" } else { row.units.as_str() };
        let _ = writeln!(out, "{index:>3}  {units:>6}  {}", row.grade);
    }
    out.trim_end().to_string()
}

fn format_chart(session: &Session) -> String {
    session.chart().map_or_else(
        || "Select at least two semesters to show a trend.".to_string(),
        |chart| {
            let mut out = format!("Trend (0 - {}):", chart.y_max);
            for (label, value) in chart.points() {
                let _ = write!(out, "\n  {label}: {}", fmt2(value));
            }
            out
        },
    )
}

/// Drive `session` from `input`, writing responses to `output`.
///
/// Errors from individual commands are reported and the loop continues.
/// Returns when `quit` is read or the input ends.
///
/// # Errors
/// Fails only if reading the input or writing the output fails.
pub fn drive<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    mut output: W,
    prompt: bool,
) -> io::Result<()> {
    if prompt {
        write!(output, "> ")?;
        output.flush()?;
    }
    for line in input.lines() {
        let line = line?;
        match SessionCommand::parse(&line) {
            Ok(Some(SessionCommand::Quit)) => break,
            Ok(Some(command)) => {
                debug!("session command: {command:?}");
                match execute(session, &command) {
                    Ok(text) if !text.is_empty() => writeln!(output, "{text}")?,
                    Ok(_) => {}
                    Err(e) => writeln!(output, "✗ {e}")?,
                }
            }
            Ok(None) => {}
            Err(message) => writeln!(output, "✗ {message}")?,
        }
        if prompt {
            write!(output, "> ")?;
            output.flush()?;
        }
    }
    Ok(())
}

/// Run the session command on stdin/stdout
pub fn run(scale: Option<&str>, config: &Config) {
    let scale = match resolve_scale(scale, config) {
        Ok(scale) => scale,
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };
    info!("Starting interactive session on the {scale} scale");
    println!("GPA session on the {scale} scale. Type 'help' for commands.");

    let mut session = Session::new(scale);
    let stdin = io::stdin();
    if let Err(e) = drive(&mut session, stdin.lock(), io::stdout(), true) {
        error!("Session aborted: {e}");
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    println!();
}
