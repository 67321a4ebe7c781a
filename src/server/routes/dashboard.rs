use crate::db::{DbNote, DbQuickLink, DbReminder, RecordCounts};
use crate::error::DashError;
use crate::server::router::DashState;
use crate::settings::SchoologySettings;
use axum::{
    Router,
    extract::State,
    http::{StatusCode, header::LOCATION},
    response::{Html, IntoResponse},
    routing::get,
};
use serde::Serialize;

const REMINDER_PREVIEW: u32 = 5;
const NOTE_PREVIEW: u32 = 5;
const QUICK_LINK_PREVIEW: u32 = 8;

#[derive(Serialize)]
struct DashboardPage {
    reminders: Vec<DbReminder>,
    notes: Vec<DbNote>,
    quick_links: Vec<DbQuickLink>,
    counts: RecordCounts,
    schoology_status: &'static str,
}

/// GET / -> 302 /dashboard
pub async fn root_redirect() -> impl IntoResponse {
    (StatusCode::FOUND, [(LOCATION, "/dashboard")])
}

/// GET /dashboard
///
/// Previews of the newest records, the per-kind counts, and whether Schoology credentials are
/// present. The Schoology API itself is never called here.
pub async fn dashboard_page(State(state): State<DashState>) -> Result<Html<String>, DashError> {
    let reminders = state.db.list_reminders(Some(REMINDER_PREVIEW)).await?;
    let notes = state.db.list_notes(Some(NOTE_PREVIEW)).await?;
    let quick_links = state.db.list_quick_links(Some(QUICK_LINK_PREVIEW)).await?;
    let counts = state.db.counts().await?;

    let schoology_status = if SchoologySettings::load(&state.db).await?.is_configured() {
        "Configured"
    } else {
        "Not connected"
    };

    state.templates.render(
        "dashboard.html",
        "Dashboard",
        DashboardPage {
            reminders,
            notes,
            quick_links,
            counts,
            schoology_status,
        },
    )
}

pub fn router() -> Router<DashState> {
    Router::new()
        .route("/", get(root_redirect))
        .route("/dashboard", get(dashboard_page))
}
