//! End-to-end behaviour of the calculator, history, aggregation and
//! classification through the session controller.

use gpa_tracker::core::aggregate::aggregate;
use gpa_tracker::core::calculator::compute_gpa;
use gpa_tracker::core::classification::{classify, Classification};
use gpa_tracker::core::error::{GpaError, ValidationError};
use gpa_tracker::core::models::{Course, Semester};
use gpa_tracker::core::scale::ScaleId;
use gpa_tracker::core::session::Session;

const EPS: f64 = 1e-9;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

fn store(session: &mut Session, name: &str, courses: &[(f64, &str)]) {
    let courses = courses.iter().map(|&(u, g)| Course::new(u, g)).collect();
    session.store_courses(name, courses).unwrap();
}

#[test]
fn single_term_gpa() {
    let mut session = Session::new(ScaleId::Four);
    session.push_course("3", "A").unwrap();
    session.push_course("3", "B").unwrap();

    let result = session.compute_current();
    assert!(close(result.gpa, 3.5));
    assert!(close(result.credit_units, 6.0));
    assert_eq!(result.display(), "3.50");
}

#[test]
fn two_semester_cgpa_and_band() {
    let mut session = Session::new(ScaleId::Four);
    store(&mut session, "Fall", &[(3.0, "A"), (3.0, "B")]);
    store(&mut session, "Spring", &[(6.0, "C")]);

    let cumulative = session.cumulative();
    assert!(close(cumulative.cgpa, 2.75));
    assert!(close(cumulative.total_credit_units, 12.0));
    assert_eq!(
        session.classification(),
        Some(Classification::SecondClassLower)
    );
}

#[test]
fn blank_name_is_rejected_without_change() {
    let mut session = Session::new(ScaleId::Four);
    store(&mut session, "Fall", &[(3.0, "A")]);
    session.push_course("3", "B").unwrap();

    let err = session.store_semester("   ").unwrap_err();
    assert!(matches!(
        err,
        GpaError::Validation(ValidationError::EmptySemesterName)
    ));
    assert_eq!(session.history().len(), 1);
    // Rows survive the failed store
    assert_eq!(session.rows()[0].units, "3");
}

#[test]
fn delete_shifts_remaining_semester() {
    let mut session = Session::new(ScaleId::Four);
    store(&mut session, "First", &[(3.0, "A")]);
    store(&mut session, "Second", &[(3.0, "C")]);

    session.delete_semester(0).unwrap();

    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history().get(0).unwrap().name, "Second");
    assert!(close(session.cumulative().cgpa, 2.0));
    assert!(matches!(
        session.delete_semester(1),
        Err(GpaError::InvalidIndex { index: 1, len: 1 })
    ));
}

#[test]
fn scale_switch_reinterprets_history() {
    let mut session = Session::new(ScaleId::Five);
    store(&mut session, "Year 1", &[(3.0, "A"), (3.0, "E")]);
    assert!(close(session.cumulative().cgpa, 3.0));

    session.set_scale(ScaleId::Four);
    // A is 4.0 and E has no value on the 4.0 scale
    assert!(close(session.cumulative().cgpa, 2.0));

    session.set_scale(ScaleId::Seven);
    assert!(close(session.cumulative().cgpa, 5.0));
}

#[test]
fn gpa_stays_within_scale_bounds() {
    for scale in ScaleId::ALL {
        let grades = scale.grades();
        let courses: Vec<Course> = grades
            .iter()
            .enumerate()
            .map(|(i, g)| Course::new(0.5 + i as f64, g.letter))
            .collect();
        let gpa = compute_gpa(&courses, scale).gpa;
        assert!(gpa >= scale.min_value() - EPS && gpa <= scale.max() + EPS);
    }
}

#[test]
fn empty_input_is_zero() {
    for scale in ScaleId::ALL {
        let no_courses: [Course; 0] = [];
        let no_semesters: [Semester; 0] = [];
        assert!(close(compute_gpa(&no_courses, scale).gpa, 0.0));
        assert!(close(aggregate(&no_semesters, scale).cgpa, 0.0));
    }
}

#[test]
fn aggregate_is_idempotent() {
    let mut session = Session::new(ScaleId::Ten);
    store(&mut session, "S1", &[(4.0, "O"), (2.0, "B+")]);
    store(&mut session, "S2", &[(3.0, "C")]);
    assert_eq!(session.cumulative(), session.cumulative());
    assert_eq!(session.summary(), session.summary());
}

#[test]
fn appending_moves_cgpa_toward_new_semester() {
    let mut session = Session::new(ScaleId::Four);
    store(&mut session, "S1", &[(3.0, "A"), (3.0, "C")]);
    let before = session.cumulative().cgpa;

    // Same GPA leaves the CGPA unchanged
    session
        .store_courses("S2", vec![Course::new(2.0, "B")])
        .unwrap();
    assert!(close(session.cumulative().cgpa, before));

    // Higher GPA pulls it up
    session
        .store_courses("S3", vec![Course::new(2.0, "A")])
        .unwrap();
    let after_high = session.cumulative().cgpa;
    assert!(after_high > before);

    // Lower GPA pulls it down
    session
        .store_courses("S4", vec![Course::new(2.0, "F")])
        .unwrap();
    assert!(session.cumulative().cgpa < after_high);
}

#[test]
fn classification_lower_bounds_are_closed() {
    assert_eq!(classify(3.5, 4.0), Some(Classification::FirstClass));
    assert_eq!(classify(3.4999, 4.0), Some(Classification::SecondClassUpper));
    // 8.75 / 10 * 4 = 3.5
    assert_eq!(classify(8.75, 10.0), Some(Classification::FirstClass));
    assert_eq!(classify(0.0, 4.0), None);
    assert_eq!(classify(f64::NAN, 4.0), None);
}

#[test]
fn selected_subset_drives_chart_and_partial_cgpa() {
    let mut session = Session::new(ScaleId::Four);
    store(&mut session, "One", &[(3.0, "A")]);
    store(&mut session, "Two", &[(3.0, "B")]);
    store(&mut session, "Three", &[(3.0, "D")]);
    session.toggle_chart_selection(2).unwrap();
    assert!(session.chart().is_none());

    session.toggle_chart_selection(0).unwrap();
    let chart = session.chart().unwrap();
    assert_eq!(chart.labels, vec!["One", "Three"]);
    assert!(close(chart.y_max, 4.0));
    assert!(close(session.aggregate_selected().cgpa, 2.5));

    // Deleting the middle entry keeps the selection on the same semesters
    session.delete_semester(1).unwrap();
    let selected: Vec<usize> = session.chart_selection().iter().copied().collect();
    assert_eq!(selected, vec![0, 1]);
    assert_eq!(session.chart().unwrap().labels, vec!["One", "Three"]);
}
