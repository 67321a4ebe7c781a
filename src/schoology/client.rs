use crate::error::SchoologyError;
use crate::settings::SchoologySettings;
use dashdeck_schema::{Assignment, AssignmentListResponse, GradeSummary, GradesResponse};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Instant;
use tracing::{debug, info};
use url::Url;

use super::oauth1::OauthSigner;

/// Upstream error bodies are cut to this many characters in error messages.
const ERROR_BODY_PREVIEW: usize = 200;

/// Stateless Schoology API client. Every request is a signed GET; nothing is cached or retried.
///
/// The `reqwest::Client` carries the timeout and proxy; build one per process and clone it.
#[derive(Clone)]
pub struct SchoologyClient {
    http: reqwest::Client,
    base_url: Url,
    signer: OauthSigner,
}

impl fmt::Debug for SchoologyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchoologyClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl SchoologyClient {
    /// Client for `https://{domain}/v1`. Fails without network I/O when the domain, key or
    /// secret is missing.
    pub fn new(settings: &SchoologySettings, http: reqwest::Client) -> Result<Self, SchoologyError> {
        let domain = settings.domain.trim().trim_end_matches('/');
        if domain.is_empty() {
            return Err(SchoologyError::MissingDomain);
        }
        let base_url = Url::parse(&format!("https://{domain}/v1"))?;
        Self::with_base_url(base_url, settings, http)
    }

    /// Client rooted at an explicit API base, e.g. a local stand-in server.
    pub fn with_base_url(
        base_url: Url,
        settings: &SchoologySettings,
        http: reqwest::Client,
    ) -> Result<Self, SchoologyError> {
        if settings.key.is_empty() || settings.secret.is_empty() {
            return Err(SchoologyError::MissingKeyOrSecret);
        }
        // Paths are appended segment by segment.
        if base_url.cannot_be_a_base() {
            return Err(SchoologyError::UrlError(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }
        Ok(Self {
            http,
            base_url,
            signer: OauthSigner::new(
                &settings.key,
                &settings.secret,
                &settings.token,
                &settings.token_secret,
            ),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /sections/{id}/assignments`, normalized.
    pub async fn fetch_assignments(
        &self,
        section_id: &str,
    ) -> Result<Vec<Assignment>, SchoologyError> {
        let url = self.endpoint(&["sections", section_id, "assignments"]);
        let payload: AssignmentListResponse = self.get_json(url).await?;
        let assignments = payload.into_assignments();
        info!(
            section_id,
            count = assignments.len(),
            "[Schoology] assignments fetched"
        );
        Ok(assignments)
    }

    /// `GET /sections/{id}/grades`, reduced to score and letter grade.
    pub async fn fetch_grades(&self, section_id: &str) -> Result<GradeSummary, SchoologyError> {
        let url = self.endpoint(&["sections", section_id, "grades"]);
        let payload: GradesResponse = self.get_json(url).await?;
        info!(section_id, "[Schoology] grades fetched");
        Ok(GradeSummary::from(payload))
    }

    /// Assignments and grades for one section. Either request failing fails the whole call, so
    /// the page never shows one half without the other.
    pub async fn fetch_section(
        &self,
        section_id: &str,
    ) -> Result<(Vec<Assignment>, GradeSummary), SchoologyError> {
        let assignments = self.fetch_assignments(section_id).await?;
        let grades = self.fetch_grades(section_id).await?;
        Ok((assignments, grades))
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, SchoologyError> {
        let start = Instant::now();
        let authorization = self.signer.authorization("GET", &url);

        let resp = self
            .http
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, authorization)
            .send()
            .await?;

        let status = resp.status();
        debug!(
            url = %url,
            status = status.as_u16(),
            took_ms = start.elapsed().as_millis() as u64,
            "[Schoology] GET"
        );

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SchoologyError::UpstreamStatus {
                status,
                body: body.chars().take(ERROR_BODY_PREVIEW).collect(),
            });
        }

        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(domain: &str, key: &str, secret: &str) -> SchoologySettings {
        SchoologySettings {
            domain: domain.to_string(),
            key: key.to_string(),
            secret: secret.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn construction_validates_before_any_request() {
        let http = reqwest::Client::new();
        let err = SchoologyClient::new(&settings("  / ", "k", "s"), http.clone()).unwrap_err();
        assert!(matches!(err, SchoologyError::MissingDomain));
        assert!(err.is_config());

        let err = SchoologyClient::new(&settings("app.schoology.com", "", "s"), http.clone())
            .unwrap_err();
        assert!(matches!(err, SchoologyError::MissingKeyOrSecret));

        let err = SchoologyClient::new(&settings("app.schoology.com", "k", ""), http).unwrap_err();
        assert_eq!(err.to_string(), "Schoology API key and secret are required");
    }

    #[test]
    fn domain_is_trimmed_and_endpoints_are_segment_encoded() {
        let client = SchoologyClient::new(
            &settings(" app.schoology.com/ ", "k", "s"),
            reqwest::Client::new(),
        )
        .unwrap();
        assert_eq!(client.base_url().as_str(), "https://app.schoology.com/v1");

        let url = client.endpoint(&["sections", "12 34", "grades"]);
        assert_eq!(
            url.as_str(),
            "https://app.schoology.com/v1/sections/12%2034/grades"
        );
    }
}
