//! Integration tests for loading transcript files

use gpa_tracker::core::classification::Classification;
use gpa_tracker::core::error::GpaError;
use gpa_tracker::core::scale::ScaleId;
use gpa_tracker::core::transcript::Transcript;
use std::fs;
use tempfile::TempDir;

const FOUR_POINT: &str = r#"
scale = "4.0"

[[semesters]]
name = "Fall 2024"
courses = [
    { units = 3, grade = "A" },
    { units = "3", grade = "B" },
]

[[semesters]]
name = "Spring 2025"
courses = [
    { units = 6, grade = "C" },
    { units = "", grade = "A" },
    { units = 0, grade = "A" },
]
"#;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write transcript");
    path
}

#[test]
fn load_and_replay_transcript() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write(&dir, "grades.toml", FOUR_POINT);

    let session = Transcript::load(&path)
        .expect("Failed to load transcript")
        .into_session(ScaleId::Ten)
        .expect("Failed to replay transcript");

    assert_eq!(session.scale(), ScaleId::Four);
    assert_eq!(session.history().len(), 2);
    // Blank and zero-unit courses are incomplete and dropped
    assert_eq!(session.history().get(1).unwrap().course_count(), 1);
    assert!((session.cumulative().cgpa - 2.75).abs() < 1e-9);
    assert_eq!(
        session.classification(),
        Some(Classification::SecondClassLower)
    );
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let result = Transcript::load(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(GpaError::Io(_))));
}

#[test]
fn grade_outside_declared_scale_is_rejected() {
    let transcript = Transcript::from_toml(
        r#"
scale = "10.0"

[[semesters]]
name = "Year 1"
courses = [{ units = 4, grade = "O" }]

[[semesters]]
name = "Year 2"
courses = [{ units = 4, grade = "D" }]
"#,
    )
    .expect("Failed to parse transcript");

    let err = transcript.into_session(ScaleId::Four).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("semester 2"));
    assert!(message.contains("Year 2"));
}

#[test]
fn semester_without_credit_is_rejected() {
    let transcript = Transcript::from_toml(
        "[[semesters]]\nname = \"Empty\"\ncourses = [{ units = \"abc\", grade = \"A\" }]\n",
    )
    .expect("Failed to parse transcript");

    let err = transcript.into_session(ScaleId::Four).unwrap_err();
    assert!(err.to_string().contains("0 credit units"));
}

#[test]
fn empty_transcript_gives_empty_session() {
    let session = Transcript::from_toml("scale = \"7\"\n")
        .expect("Failed to parse transcript")
        .into_session(ScaleId::Four)
        .expect("Failed to replay transcript");
    assert_eq!(session.scale(), ScaleId::Seven);
    assert!(session.history().is_empty());
    assert_eq!(session.cumulative().display(), "0.00");
}
