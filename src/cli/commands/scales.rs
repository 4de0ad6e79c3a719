//! Scales command handler

use gpa_tracker::core::scale::ScaleId;
use gpa_tracker::shared::numeric::fmt2;

/// Print every supported scale with its letter grades
pub fn run() {
    for scale in ScaleId::ALL {
        let grades: Vec<String> = scale
            .grades()
            .iter()
            .map(|g| format!("{}={}", g.letter, fmt2(g.value)))
            .collect();
        println!("{scale:>5}  {}", grades.join("  "));
    }
}
