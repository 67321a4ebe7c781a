pub mod schoology;

pub use schoology::{
    Assignment, AssignmentListResponse, GradeSummary, GradesResponse, RawAssignment, RawGrade,
};
