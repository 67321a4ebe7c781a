//! OAuth 1.0a request signing (HMAC-SHA1), one- and two-legged.
//!
//! Only what a signed GET needs: no body parameters, no callback or verifier.

use base64::Engine;
use chrono::Utc;
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rand::{Rng, distr::Alphanumeric};
use sha1::Sha1;
use std::fmt::Write as _;
use url::Url;

type HmacSha1 = Hmac<Sha1>;

/// RFC 3986 unreserved characters stay literal; everything else is escaped.
const OAUTH_ENCODE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";

fn encode(s: &str) -> String {
    utf8_percent_encode(s, OAUTH_ENCODE).to_string()
}

#[derive(Clone)]
pub(crate) struct OauthSigner {
    consumer_key: String,
    consumer_secret: String,
    token: Option<String>,
    token_secret: Option<String>,
}

impl OauthSigner {
    /// Empty token fields mean "no token" (two-legged signing).
    pub(crate) fn new(consumer_key: &str, consumer_secret: &str, token: &str, token_secret: &str) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self {
            consumer_key: consumer_key.to_string(),
            consumer_secret: consumer_secret.to_string(),
            token: non_empty(token),
            token_secret: non_empty(token_secret),
        }
    }

    /// `Authorization` header value with a fresh nonce and timestamp.
    pub(crate) fn authorization(&self, method: &str, url: &Url) -> String {
        let nonce: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();
        let timestamp = Utc::now().timestamp().to_string();
        self.authorization_with(method, url, &nonce, &timestamp)
    }

    fn authorization_with(&self, method: &str, url: &Url, nonce: &str, timestamp: &str) -> String {
        let mut oauth_params: Vec<(&str, &str)> = vec![
            ("oauth_consumer_key", self.consumer_key.as_str()),
            ("oauth_nonce", nonce),
            ("oauth_signature_method", SIGNATURE_METHOD),
            ("oauth_timestamp", timestamp),
            ("oauth_version", OAUTH_VERSION),
        ];
        if let Some(token) = self.token.as_deref() {
            oauth_params.push(("oauth_token", token));
        }

        let signature = self.sign(&signature_base_string(method, url, &oauth_params));

        let mut header = String::from("OAuth ");
        let fields = oauth_params
            .iter()
            .map(|(k, v)| (*k, *v))
            .chain(std::iter::once(("oauth_signature", signature.as_str())));
        for (i, (k, v)) in fields.enumerate() {
            if i > 0 {
                header.push_str(", ");
            }
            let _ = write!(header, "{}=\"{}\"", encode(k), encode(v));
        }
        header
    }

    fn sign(&self, base_string: &str) -> String {
        let key = format!(
            "{}&{}",
            encode(&self.consumer_secret),
            encode(self.token_secret.as_deref().unwrap_or_default())
        );
        let mut mac =
            HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC accepts keys of any length");
        mac.update(base_string.as_bytes());
        base64::engine::general_purpose::STANDARD.encode(mac.finalize().into_bytes())
    }
}

/// `METHOD&base-uri&normalized-params`, every part percent-encoded.
fn signature_base_string(method: &str, url: &Url, oauth_params: &[(&str, &str)]) -> String {
    let mut base_uri = format!("{}://{}", url.scheme(), url.host_str().unwrap_or_default());
    if let Some(port) = url.port() {
        let _ = write!(base_uri, ":{port}");
    }
    base_uri.push_str(url.path());

    let mut params: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (encode(&k), encode(&v)))
        .chain(oauth_params.iter().map(|(k, v)| (encode(k), encode(v))))
        .collect();
    params.sort();

    let normalized = params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        encode(&base_uri),
        encode(&normalized)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photos_url() -> Url {
        Url::parse("http://photos.example.net/photos?file=vacation.jpg&size=original").unwrap()
    }

    #[test]
    fn three_legged_signature_matches_reference_vector() {
        let signer = OauthSigner::new(
            "dpf43f3p2l4k3l03",
            "kd94hf93k423kf44",
            "nnch734d00sl2jdk",
            "pfkkdhi9sl3r4s00",
        );
        let header =
            signer.authorization_with("GET", &photos_url(), "kllo9940pd9333jh", "1191242096");

        assert!(header.starts_with("OAuth "));
        assert!(header.contains(r#"oauth_signature="tR3%2BTy81lMeYAr%2FFid0kMTYa%2FWM%3D""#));
        assert!(header.contains(r#"oauth_token="nnch734d00sl2jdk""#));
        assert!(header.contains(r#"oauth_signature_method="HMAC-SHA1""#));
    }

    #[test]
    fn two_legged_signature_omits_token() {
        let signer = OauthSigner::new("dpf43f3p2l4k3l03", "kd94hf93k423kf44", "", "");
        let header =
            signer.authorization_with("GET", &photos_url(), "kllo9940pd9333jh", "1191242096");

        assert!(!header.contains("oauth_token="));
        assert!(header.contains(r#"oauth_signature="Jg5MXVnexhzMDTv7IBUy3goIGqc%3D""#));
    }

    #[test]
    fn base_string_normalizes_method_and_sorts_params() {
        let url = Url::parse("https://api.example.com:8443/v1/sections/9?b=2&a=1").unwrap();
        let base = signature_base_string("get", &url, &[("oauth_nonce", "n")]);
        assert_eq!(
            base,
            "GET&https%3A%2F%2Fapi.example.com%3A8443%2Fv1%2Fsections%2F9&a%3D1%26b%3D2%26oauth_nonce%3Dn"
        );
    }

    #[test]
    fn fresh_nonce_per_request() {
        let signer = OauthSigner::new("k", "s", "", "");
        let url = Url::parse("https://api.example.com/v1").unwrap();
        assert_ne!(signer.authorization("GET", &url), signer.authorization("GET", &url));
    }
}
