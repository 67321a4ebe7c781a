//! Wire shapes returned by the Schoology REST API and the normalized records built from them.
//!
//! The field-name fallbacks below come from observed payloads, not from a published schema.
//! Treat them as unverified: keep every alias until a real response proves one unnecessary.

mod assignment;
mod grade;
mod value;

pub use assignment::{Assignment, AssignmentListResponse, RawAssignment};
pub use grade::{GradeSummary, GradesResponse, RawGrade};
