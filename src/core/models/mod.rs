//! Data models for `GpaTracker`

pub mod semester;
pub mod subject;
pub mod transcript;

pub use semester::{GradedSemester, Semester};
pub use subject::{GradedSubject, Subject};
pub use transcript::{SubjectUpdate, Transcript, TranscriptError, TranscriptResult};
