use crate::db::{DbReminder, RecordKind};
use crate::error::DashError;
use crate::server::router::DashState;
use axum::{
    Form, Router,
    extract::{Path, State},
    response::{Html, Redirect},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use super::ignore_rejected;

#[derive(Debug, Deserialize)]
pub struct ReminderForm {
    #[serde(default)]
    pub text: String,
    /// Empty means "no due date".
    #[serde(default)]
    pub due_at: String,
}

#[derive(Serialize)]
struct RemindersPage {
    reminders: Vec<DbReminder>,
}

pub async fn reminders_page(State(state): State<DashState>) -> Result<Html<String>, DashError> {
    let reminders = state.db.list_reminders(None).await?;
    state
        .templates
        .render("reminders.html", "Reminders", RemindersPage { reminders })
}

pub async fn reminders_add(
    State(state): State<DashState>,
    Form(form): Form<ReminderForm>,
) -> Result<Redirect, DashError> {
    let res = state.db.add_reminder(&form.text, Some(&form.due_at)).await;
    ignore_rejected("reminder", res)?;
    Ok(Redirect::to("/reminders"))
}

pub async fn reminders_toggle(
    State(state): State<DashState>,
    Path(id): Path<i64>,
) -> Result<Redirect, DashError> {
    state.db.toggle_reminder(id).await?;
    Ok(Redirect::to("/reminders"))
}

pub async fn reminders_delete(
    State(state): State<DashState>,
    Path(id): Path<i64>,
) -> Result<Redirect, DashError> {
    state.db.delete(RecordKind::Reminder, id).await?;
    Ok(Redirect::to("/reminders"))
}

pub fn router() -> Router<DashState> {
    Router::new()
        .route("/reminders", get(reminders_page))
        .route("/reminders/add", post(reminders_add))
        .route("/reminders/{id}/toggle", post(reminders_toggle))
        .route("/reminders/{id}/delete", post(reminders_delete))
}
