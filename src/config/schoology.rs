use serde::{Deserialize, Serialize};
use url::Url;

/// Schoology client configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SchoologyConfig {
    /// Whole-request timeout for API calls, in seconds. No retries are made.
    /// TOML: `schoology.timeout_secs`. Default: `15`.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Optional upstream HTTP proxy. If set, used for the reqwest client.
    /// TOML: `schoology.proxy`. Example: `http://127.0.0.1:1080`.
    #[serde(default)]
    pub proxy: Option<Url>,
}

impl Default for SchoologyConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            proxy: None,
        }
    }
}

fn default_timeout_secs() -> u64 {
    15
}
