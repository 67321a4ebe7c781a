use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::value::{first_present, to_text};

/// `GET /v1/sections/{id}/grades`
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct GradesResponse {
    #[serde(default)]
    pub grade: Option<RawGrade>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct RawGrade {
    #[serde(default)]
    pub current_score: Option<Value>,
    /// Alias for `current_score` seen on some sections.
    #[serde(default)]
    pub grade: Option<Value>,
    #[serde(default)]
    pub current_grade: Option<Value>,
    /// Alias for `current_grade`.
    #[serde(default)]
    pub letter_grade: Option<Value>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct GradeSummary {
    pub current_score: String,
    pub current_grade: String,
}

impl From<GradesResponse> for GradeSummary {
    fn from(resp: GradesResponse) -> Self {
        let grade = resp.grade.unwrap_or_default();
        Self {
            current_score: first_present([grade.current_score.as_ref(), grade.grade.as_ref()])
                .map(to_text)
                .unwrap_or_default(),
            current_grade: first_present([
                grade.current_grade.as_ref(),
                grade.letter_grade.as_ref(),
            ])
            .map(to_text)
            .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn primary_names_win() {
        let resp: GradesResponse = serde_json::from_value(json!({
            "grade": { "current_score": 93.4, "grade": 10, "current_grade": "A", "letter_grade": "F" }
        }))
        .unwrap();
        let summary = GradeSummary::from(resp);
        assert_eq!(summary.current_score, "93.4");
        assert_eq!(summary.current_grade, "A");
    }

    #[test]
    fn aliases_fill_in_and_absent_is_empty() {
        let resp: GradesResponse =
            serde_json::from_value(json!({ "grade": { "grade": "88", "letter_grade": "B+" } }))
                .unwrap();
        let summary = GradeSummary::from(resp);
        assert_eq!(summary.current_score, "88");
        assert_eq!(summary.current_grade, "B+");

        let empty = GradeSummary::from(GradesResponse::default());
        assert_eq!(empty, GradeSummary::default());
    }
}
