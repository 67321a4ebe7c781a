use crate::error::{DashError, SchoologyError};
use crate::schoology::SchoologyClient;
use crate::server::router::DashState;
use crate::settings::SchoologySettings;
use axum::{
    Form, Router,
    extract::{Query, State},
    response::{Html, Redirect},
    routing::{get, post},
};
use dashdeck_schema::{Assignment, GradeSummary};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Deserialize, Default)]
pub struct SchoologyQuery {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub struct SchoologySettingsForm {
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub secret: String,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub token_secret: String,
    #[serde(default)]
    pub section_id: String,
}

impl From<SchoologySettingsForm> for SchoologySettings {
    fn from(form: SchoologySettingsForm) -> Self {
        SchoologySettings {
            domain: form.domain,
            key: form.key,
            secret: form.secret,
            token: form.token,
            token_secret: form.token_secret,
            section_id: form.section_id,
        }
        .trimmed()
    }
}

#[derive(Serialize)]
struct SchoologyPage {
    settings: SchoologySettings,
    assignments: Vec<Assignment>,
    grades: Option<GradeSummary>,
    message: String,
    error: String,
}

/// GET /schoology
///
/// Calls the API only when domain, key and secret are all set, and only fetches section data
/// when a section id is set. Any client failure becomes the inline `error` string.
pub async fn schoology_page(
    State(state): State<DashState>,
    Query(query): Query<SchoologyQuery>,
) -> Result<Html<String>, DashError> {
    let settings = SchoologySettings::load(&state.db).await?;

    let mut assignments = Vec::new();
    let mut grades = None;
    let mut connect_error = String::new();

    if settings.can_connect() {
        match fetch_section(&state, &settings).await {
            Ok((a, g)) => {
                assignments = a;
                grades = g;
            }
            Err(e) => {
                warn!(error = %e, "[Schoology] section fetch failed");
                connect_error = e.to_string();
            }
        }
    }

    let error = if query.error.is_empty() {
        connect_error
    } else {
        query.error
    };

    state.templates.render(
        "schoology.html",
        "Schoology",
        SchoologyPage {
            settings,
            assignments,
            grades,
            message: query.message,
            error,
        },
    )
}

async fn fetch_section(
    state: &DashState,
    settings: &SchoologySettings,
) -> Result<(Vec<Assignment>, Option<GradeSummary>), SchoologyError> {
    let client = SchoologyClient::new(settings, state.client.clone())?;
    if settings.section_id.is_empty() {
        return Ok((Vec::new(), None));
    }
    let (assignments, grades) = client.fetch_section(&settings.section_id).await?;
    Ok((assignments, Some(grades)))
}

/// POST /schoology/settings
pub async fn schoology_settings_save(
    State(state): State<DashState>,
    Form(form): Form<SchoologySettingsForm>,
) -> Result<Redirect, DashError> {
    let settings = SchoologySettings::from(form);
    settings.save(&state.db).await?;
    info!(
        domain = %settings.domain,
        section_id = %settings.section_id,
        "[Schoology] settings saved"
    );
    Ok(Redirect::to("/schoology?message=Saved"))
}

pub fn router() -> Router<DashState> {
    Router::new()
        .route("/schoology", get(schoology_page))
        .route("/schoology/settings", post(schoology_settings_save))
}
