use crate::db::{DbQuickLink, RecordKind};
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
pub struct QuickLinkForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Serialize)]
struct QuickLinksPage {
    quick_links: Vec<DbQuickLink>,
}

pub async fn quick_links_page(State(state): State<DashState>) -> Result<Html<String>, DashError> {
    let quick_links = state.db.list_quick_links(None).await?;
    state.templates.render(
        "quick_links.html",
        "Quick Links",
        QuickLinksPage { quick_links },
    )
}

pub async fn quick_links_add(
    State(state): State<DashState>,
    Form(form): Form<QuickLinkForm>,
) -> Result<Redirect, DashError> {
    let res = state.db.add_quick_link(&form.title, &form.url).await;
    ignore_rejected("quick_link", res)?;
    Ok(Redirect::to("/quick-links"))
}

pub async fn quick_links_delete(
    State(state): State<DashState>,
    Path(id): Path<i64>,
) -> Result<Redirect, DashError> {
    state.db.delete(RecordKind::QuickLink, id).await?;
    Ok(Redirect::to("/quick-links"))
}

pub fn router() -> Router<DashState> {
    Router::new()
        .route("/quick-links", get(quick_links_page))
        .route("/quick-links/add", post(quick_links_add))
        .route("/quick-links/{id}/delete", post(quick_links_delete))
}
