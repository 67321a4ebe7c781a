use crate::db::{DbNote, RecordKind};
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
pub struct NoteForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Serialize)]
struct NotesPage {
    notes: Vec<DbNote>,
}

/// GET /notes
pub async fn notes_page(State(state): State<DashState>) -> Result<Html<String>, DashError> {
    let notes = state.db.list_notes(None).await?;
    state.templates.render("notes.html", "Notes", NotesPage { notes })
}

/// POST /notes/add
pub async fn notes_add(
    State(state): State<DashState>,
    Form(form): Form<NoteForm>,
) -> Result<Redirect, DashError> {
    ignore_rejected("note", state.db.add_note(&form.title, &form.content).await)?;
    Ok(Redirect::to("/notes"))
}

/// POST /notes/{id}/delete
pub async fn notes_delete(
    State(state): State<DashState>,
    Path(id): Path<i64>,
) -> Result<Redirect, DashError> {
    state.db.delete(RecordKind::Note, id).await?;
    Ok(Redirect::to("/notes"))
}

pub fn router() -> Router<DashState> {
    Router::new()
        .route("/notes", get(notes_page))
        .route("/notes/add", post(notes_add))
        .route("/notes/{id}/delete", post(notes_delete))
}
