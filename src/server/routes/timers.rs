use crate::db::{DbTimer, RecordKind, TimerCreate};
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
pub struct TimerForm {
    #[serde(default)]
    pub label: String,
    /// Raw text; parsed and clamped by `TimerCreate::from_form`.
    #[serde(default)]
    pub seconds: String,
}

#[derive(Serialize)]
struct TimersPage {
    timers: Vec<DbTimer>,
}

pub async fn timers_page(State(state): State<DashState>) -> Result<Html<String>, DashError> {
    let timers = state.db.list_timers().await?;
    state
        .templates
        .render("timers.html", "Timers", TimersPage { timers })
}

pub async fn timers_add(
    State(state): State<DashState>,
    Form(form): Form<TimerForm>,
) -> Result<Redirect, DashError> {
    let res = match TimerCreate::from_form(&form.label, &form.seconds) {
        Ok(create) => state.db.create(create).await,
        Err(e) => Err(e.into()),
    };
    ignore_rejected("timer", res)?;
    Ok(Redirect::to("/timers"))
}

pub async fn timers_delete(
    State(state): State<DashState>,
    Path(id): Path<i64>,
) -> Result<Redirect, DashError> {
    state.db.delete(RecordKind::Timer, id).await?;
    Ok(Redirect::to("/timers"))
}

pub fn router() -> Router<DashState> {
    Router::new()
        .route("/timers", get(timers_page))
        .route("/timers/add", post(timers_add))
        .route("/timers/{id}/delete", post(timers_delete))
}
