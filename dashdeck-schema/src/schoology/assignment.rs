use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::value::{first_present, is_present, to_number, to_text};

/// `GET /v1/sections/{id}/assignments`
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AssignmentListResponse {
    #[serde(default)]
    pub assignment: Option<Vec<RawAssignment>>,
}

/// One upstream assignment. Every field is optional and loosely typed.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct RawAssignment {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub due: Option<Value>,
    #[serde(default)]
    pub max_points: Option<Value>,
    #[serde(default)]
    pub web_url: Option<Value>,
    #[serde(default)]
    pub assignment_url: Option<Value>,
    #[serde(default)]
    pub url: Option<Value>,
}

/// Assignment as shown on the integration page.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Assignment {
    pub id: String,
    pub title: String,
    pub description: String,
    pub due: String,
    pub max_points: f64,
    pub web_url: String,
}

impl AssignmentListResponse {
    pub fn into_assignments(self) -> Vec<Assignment> {
        self.assignment
            .unwrap_or_default()
            .into_iter()
            .map(Assignment::from)
            .collect()
    }
}

impl From<RawAssignment> for Assignment {
    fn from(raw: RawAssignment) -> Self {
        let non_null = |v: &Option<Value>| v.as_ref().filter(|v| !v.is_null()).map(to_text);

        let description = raw
            .description
            .as_ref()
            .filter(|v| is_present(v))
            .map_or_else(|| "No description".to_string(), to_text);

        let web_url = first_present([
            raw.web_url.as_ref(),
            raw.assignment_url.as_ref(),
            raw.url.as_ref(),
        ])
        .map(to_text)
        .unwrap_or_default();

        Self {
            id: non_null(&raw.id).unwrap_or_default(),
            title: non_null(&raw.title).unwrap_or_else(|| "Untitled".to_string()),
            description,
            due: non_null(&raw.due).unwrap_or_else(|| "No due date".to_string()),
            max_points: raw.max_points.as_ref().and_then(to_number).unwrap_or(0.0),
            web_url,
        }
    }
}
