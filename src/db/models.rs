use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbNote {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbReminder {
    pub id: i64,
    pub text: String,
    pub due_at: Option<String>,
    pub is_done: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbAlarm {
    pub id: i64,
    pub label: String,
    /// Free-form as entered (usually `HH:MM`); sorted lexically.
    pub time_of_day: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbTimer {
    pub id: i64,
    pub label: String,
    pub seconds: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbQuickLink {
    pub id: i64,
    pub title: String,
    pub url: String,
}

/// Per-kind totals for the dashboard. `reminders` counts open reminders only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, FromRow)]
pub struct RecordCounts {
    pub notes: i64,
    pub reminders: i64,
    pub alarms: i64,
    pub timers: i64,
    pub quick_links: i64,
}
