//! Integration smoke tests for `gpa_tracker`

use gpa_tracker::core::scale::ScaleId;
use gpa_tracker::core::session::Session;
use gpa_tracker::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn fresh_session_is_empty() {
    let session = Session::default();
    assert_eq!(session.scale(), ScaleId::Four);
    assert_eq!(session.rows().len(), 1);
    assert!(session.history().is_empty());
    assert_eq!(session.cumulative().display(), "0.00");
    assert!(session.classification().is_none());
    assert!(session.chart().is_none());
}
