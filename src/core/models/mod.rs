//! Data models for `GpaTracker`

pub mod course;
pub mod semester;

pub use course::{Course, CourseRow};
pub use semester::Semester;
