use crate::config::Config;
use crate::db::DbActorHandle;
use crate::error::DashError;
use crate::server::render::Templates;
use crate::server::routes::{alarms, dashboard, notes, quick_links, reminders, schoology, timers};

use axum::{
    Router,
    extract::Request,
    http::{HeaderName, StatusCode, Version, header::USER_AGENT},
    middleware::{self, Next},
    response::Response,
};
use base64::Engine as _;
use rand::RngCore;
use reqwest::header::HeaderValue;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

pub const DASHDECK_USER_AGENT: &str = concat!("dashdeck/", env!("CARGO_PKG_VERSION"));

const MAX_REQUEST_ID_LEN: usize = 128;
const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

fn generate_request_id() -> String {
    // 96 bits => 16 chars base64url (no padding).
    let mut bytes = [0u8; 12];
    rand::rng().fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

fn format_http_version(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "HTTP/0.9",
        Version::HTTP_10 => "HTTP/1.0",
        Version::HTTP_11 => "HTTP/1.1",
        Version::HTTP_2 => "HTTP/2",
        Version::HTTP_3 => "HTTP/3",
        _ => "HTTP/?",
    }
}

#[derive(Clone)]
pub struct DashState {
    pub db: DbActorHandle,
    /// Outbound client for the Schoology API (timeout and proxy applied).
    pub client: reqwest::Client,
    pub templates: Arc<Templates>,
    pub static_dir: PathBuf,
}

impl DashState {
    pub fn new(db: DbActorHandle, cfg: &Config) -> Result<Self, DashError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(DASHDECK_USER_AGENT)
            .connect_timeout(Duration::from_secs(cfg.schoology.timeout_secs))
            .timeout(Duration::from_secs(cfg.schoology.timeout_secs));

        if let Some(proxy_url) = cfg.schoology.proxy.as_ref() {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url.as_str())?);
        }

        Ok(Self {
            db,
            client: builder.build()?,
            templates: Arc::new(Templates::load()?),
            static_dir: cfg.basic.static_dir.clone(),
        })
    }
}

async fn not_found_handler() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn access_log(req: Request, next: Next) -> Response {
    // Capture request metadata before moving `req` into the handler stack.
    let method = req.method().clone();
    let uri = req.uri().clone();
    let version = req.version();

    let request_id = req
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty() && v.len() <= MAX_REQUEST_ID_LEN)
        .map(str::to_string)
        .unwrap_or_else(generate_request_id);

    let user_agent = req
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let start = Instant::now();
    let mut resp = next.run(req).await;

    // Always reflect `x-request-id` for easier correlation, even if the client didn't send one.
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        resp.headers_mut().insert(X_REQUEST_ID, value);
    }

    let status = resp.status();
    let latency_ms = start.elapsed().as_millis() as u64;
    let path = uri.path();
    let protocol = format_http_version(version);

    if status.is_server_error() {
        error!(
            "| {:>3} | {} | {:^7} | {:<8} | {} | {}ms | {}",
            status.as_u16(),
            request_id,
            method.as_str(),
            protocol,
            path,
            latency_ms,
            user_agent
        );
    } else if status.is_client_error() {
        warn!(
            "| {:>3} | {} | {:^7} | {:<8} | {} | {}ms | {}",
            status.as_u16(),
            request_id,
            method.as_str(),
            protocol,
            path,
            latency_ms,
            user_agent
        );
    } else {
        info!(
            "| {:>3} | {} | {:^7} | {:<8} | {} | {}ms | {}",
            status.as_u16(),
            request_id,
            method.as_str(),
            protocol,
            path,
            latency_ms,
            user_agent
        );
    }

    resp
}

pub fn dash_router(state: DashState) -> Router {
    let static_files = ServeDir::new(state.static_dir.clone());

    Router::new()
        .merge(dashboard::router())
        .merge(notes::router())
        .merge(reminders::router())
        .merge(alarms::router())
        .merge(timers::router())
        .merge(quick_links::router())
        .merge(schoology::router())
        .nest_service("/static", static_files)
        .fallback(not_found_handler)
        .with_state(state)
        .layer(middleware::from_fn(access_log))
}
