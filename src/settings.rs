//! Typed view over the `schoology_`-prefixed rows of the settings table.

use crate::db::DbActorHandle;
use crate::error::DashError;
use serde::Serialize;
use std::collections::HashMap;

pub const SCHOOLOGY_PREFIX: &str = "schoology_";

/// Schoology credentials and the section to show. Unset keys load as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchoologySettings {
    pub domain: String,
    pub key: String,
    pub secret: String,
    pub token: String,
    pub token_secret: String,
    pub section_id: String,
}

impl SchoologySettings {
    pub fn from_map(map: &HashMap<String, String>) -> Self {
        let get = |field: &str| {
            map.get(&format!("{SCHOOLOGY_PREFIX}{field}"))
                .cloned()
                .unwrap_or_default()
        };
        Self {
            domain: get("domain"),
            key: get("key"),
            secret: get("secret"),
            token: get("token"),
            token_secret: get("token_secret"),
            section_id: get("section_id"),
        }
    }

    /// Same record with every field trimmed.
    pub fn trimmed(&self) -> Self {
        Self {
            domain: self.domain.trim().to_string(),
            key: self.key.trim().to_string(),
            secret: self.secret.trim().to_string(),
            token: self.token.trim().to_string(),
            token_secret: self.token_secret.trim().to_string(),
            section_id: self.section_id.trim().to_string(),
        }
    }

    /// `(key, value)` rows in storage form.
    pub fn to_pairs(&self) -> [(String, &str); 6] {
        let key = |field: &str| format!("{SCHOOLOGY_PREFIX}{field}");
        [
            (key("domain"), self.domain.as_str()),
            (key("key"), self.key.as_str()),
            (key("secret"), self.secret.as_str()),
            (key("token"), self.token.as_str()),
            (key("token_secret"), self.token_secret.as_str()),
            (key("section_id"), self.section_id.as_str()),
        ]
    }

    /// What the dashboard reports as "Configured".
    pub fn is_configured(&self) -> bool {
        !self.domain.is_empty() && !self.key.is_empty()
    }

    /// Enough to build a client and attempt a request.
    pub fn can_connect(&self) -> bool {
        self.is_configured() && !self.secret.is_empty()
    }

    pub async fn load(db: &DbActorHandle) -> Result<Self, DashError> {
        let map = db.get_settings(Some(SCHOOLOGY_PREFIX)).await?;
        Ok(Self::from_map(&map))
    }

    pub async fn save(&self, db: &DbActorHandle) -> Result<(), DashError> {
        for (key, value) in self.to_pairs() {
            db.set_setting(key, value).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_load_empty_and_foreign_keys_are_ignored() {
        let map = HashMap::from([
            ("schoology_domain".to_string(), "app.schoology.com".to_string()),
            ("schoology_key".to_string(), "ck".to_string()),
            ("theme".to_string(), "dark".to_string()),
        ]);
        let s = SchoologySettings::from_map(&map);
        assert_eq!(s.domain, "app.schoology.com");
        assert_eq!(s.key, "ck");
        assert_eq!(s.secret, "");
        assert!(s.is_configured());
        assert!(!s.can_connect());
    }

    #[test]
    fn pairs_round_trip_through_from_map() {
        let s = SchoologySettings {
            domain: "d".into(),
            key: "k".into(),
            secret: "s".into(),
            token: String::new(),
            token_secret: String::new(),
            section_id: "42".into(),
        };
        let map: HashMap<String, String> = s
            .to_pairs()
            .into_iter()
            .map(|(k, v)| (k, v.to_string()))
            .collect();
        assert_eq!(map.len(), 6);
        assert!(map.keys().all(|k| k.starts_with(SCHOOLOGY_PREFIX)));
        assert_eq!(SchoologySettings::from_map(&map), s);
    }

    #[test]
    fn trimmed_strips_every_field() {
        let s = SchoologySettings {
            domain: " d ".into(),
            section_id: "\t7\n".into(),
            ..Default::default()
        }
        .trimmed();
        assert_eq!(s.domain, "d");
        assert_eq!(s.section_id, "7");
    }
}
