//! Validated inputs for the `add` operations.
//!
//! Each constructor trims its string fields and rejects empty required ones, so a value of these
//! types can always be inserted. Optional fields that are blank after trimming become `None` or
//! empty text.

use crate::error::ValidationError;

/// Upper bound for a stored timer, one day.
pub const MAX_TIMER_SECONDS: i64 = 86_400;

fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCreate {
    pub(crate) title: String,
    pub(crate) content: String,
}

impl NoteCreate {
    pub fn new(title: &str, content: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            title: required("title", title)?,
            content: content.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderCreate {
    pub(crate) text: String,
    pub(crate) due_at: Option<String>,
}

impl ReminderCreate {
    pub fn new(text: &str, due_at: Option<&str>) -> Result<Self, ValidationError> {
        Ok(Self {
            text: required("text", text)?,
            due_at: due_at
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmCreate {
    pub(crate) label: String,
    pub(crate) time_of_day: String,
}

impl AlarmCreate {
    pub fn new(label: &str, time_of_day: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            label: required("label", label)?,
            time_of_day: required("time_of_day", time_of_day)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerCreate {
    pub(crate) label: String,
    pub(crate) seconds: i64,
}

impl TimerCreate {
    /// Non-positive durations are rejected; anything above [`MAX_TIMER_SECONDS`] is clamped.
    pub fn new(label: &str, seconds: i64) -> Result<Self, ValidationError> {
        let label = required("label", label)?;
        if seconds <= 0 {
            return Err(ValidationError::NonPositiveSeconds(seconds));
        }
        Ok(Self {
            label,
            seconds: seconds.min(MAX_TIMER_SECONDS),
        })
    }

    /// Raw form text: parsed, then clamped into `1..=MAX_TIMER_SECONDS` instead of rejected.
    /// Only non-integer text and a blank label fail.
    pub fn from_form(label: &str, seconds: &str) -> Result<Self, ValidationError> {
        let raw = seconds.trim();
        let seconds = raw
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidSeconds(raw.to_string()))?;
        Self::new(label, seconds.clamp(1, MAX_TIMER_SECONDS))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickLinkCreate {
    pub(crate) title: String,
    pub(crate) url: String,
}

impl QuickLinkCreate {
    pub fn new(title: &str, url: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            title: required("title", title)?,
            url: required("url", url)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordCreate {
    Note(NoteCreate),
    Reminder(ReminderCreate),
    Alarm(AlarmCreate),
    Timer(TimerCreate),
    QuickLink(QuickLinkCreate),
}

impl RecordCreate {
    pub fn kind(&self) -> RecordKind {
        match self {
            RecordCreate::Note(_) => RecordKind::Note,
            RecordCreate::Reminder(_) => RecordKind::Reminder,
            RecordCreate::Alarm(_) => RecordKind::Alarm,
            RecordCreate::Timer(_) => RecordKind::Timer,
            RecordCreate::QuickLink(_) => RecordKind::QuickLink,
        }
    }
}

impl From<NoteCreate> for RecordCreate {
    fn from(c: NoteCreate) -> Self {
        RecordCreate::Note(c)
    }
}

impl From<ReminderCreate> for RecordCreate {
    fn from(c: ReminderCreate) -> Self {
        RecordCreate::Reminder(c)
    }
}

impl From<AlarmCreate> for RecordCreate {
    fn from(c: AlarmCreate) -> Self {
        RecordCreate::Alarm(c)
    }
}

impl From<TimerCreate> for RecordCreate {
    fn from(c: TimerCreate) -> Self {
        RecordCreate::Timer(c)
    }
}

impl From<QuickLinkCreate> for RecordCreate {
    fn from(c: QuickLinkCreate) -> Self {
        RecordCreate::QuickLink(c)
    }
}

/// Record kinds that support delete-by-id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Note,
    Reminder,
    Alarm,
    Timer,
    QuickLink,
}

impl RecordKind {
    pub(crate) fn table(self) -> &'static str {
        match self {
            RecordKind::Note => "notes",
            RecordKind::Reminder => "reminders",
            RecordKind::Alarm => "alarms",
            RecordKind::Timer => "timers",
            RecordKind::QuickLink => "quick_links",
        }
    }
}
