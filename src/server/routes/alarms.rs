use crate::db::{DbAlarm, RecordKind};
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
pub struct AlarmForm {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub time_of_day: String,
}

#[derive(Serialize)]
struct AlarmsPage {
    alarms: Vec<DbAlarm>,
}

pub async fn alarms_page(State(state): State<DashState>) -> Result<Html<String>, DashError> {
    let alarms = state.db.list_alarms().await?;
    state
        .templates
        .render("alarms.html", "Alarms", AlarmsPage { alarms })
}

pub async fn alarms_add(
    State(state): State<DashState>,
    Form(form): Form<AlarmForm>,
) -> Result<Redirect, DashError> {
    let res = state.db.add_alarm(&form.label, &form.time_of_day).await;
    ignore_rejected("alarm", res)?;
    Ok(Redirect::to("/alarms"))
}

pub async fn alarms_delete(
    State(state): State<DashState>,
    Path(id): Path<i64>,
) -> Result<Redirect, DashError> {
    state.db.delete(RecordKind::Alarm, id).await?;
    Ok(Redirect::to("/alarms"))
}

pub fn router() -> Router<DashState> {
    Router::new()
        .route("/alarms", get(alarms_page))
        .route("/alarms/add", post(alarms_add))
        .route("/alarms/{id}/delete", post(alarms_delete))
}
