//! Integration tests for logger behavior.

use gpa_tracker::logger::{set_level, set_level_from_str, Level};
use gpa_tracker::{debug, error, info, verbose, warn};

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("warn"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn level_from_str_matches_display() {
    for level in [Level::Error, Level::Warn, Level::Info, Level::Debug] {
        assert_eq!(level.to_string().parse::<Level>().unwrap(), level);
    }
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
    verbose!("verbose integration");
}

#[cfg(feature = "log-debug")]
#[test]
fn debug_can_be_toggled() {
    use gpa_tracker::logger::{disable_debug, enable_debug, is_debug_enabled};

    disable_debug();
    assert!(!is_debug_enabled());
    enable_debug();
    assert!(is_debug_enabled());
}
