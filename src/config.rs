//! Configuration handling for the TUI
//!
//! Document store credentials come from `config.json` in the platform config
//! directory, overridden by `NURSE_CONNECT_*` environment variables. Nothing is
//! compiled in.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Hosted document store project settings
#[derive(Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoreCredentials {
    pub api_key: Option<String>,
    pub auth_domain: Option<String>,
    pub project_id: Option<String>,
    pub storage_bucket: Option<String>,
    pub messaging_sender_id: Option<String>,
    pub app_id: Option<String>,
}

impl std::fmt::Debug for StoreCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreCredentials")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("auth_domain", &self.auth_domain)
            .field("project_id", &self.project_id)
            .field("storage_bucket", &self.storage_bucket)
            .field("messaging_sender_id", &self.messaging_sender_id)
            .field("app_id", &self.app_id)
            .finish()
    }
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Document store credentials
    #[serde(default)]
    pub store: StoreCredentials,
    /// Firestore endpoint override (emulators, tests)
    pub firestore_url: Option<String>,
    /// Store request timeout in seconds
    pub timeout_secs: Option<u64>,
}

/// Resolved settings for the Firestore client
#[derive(Clone, PartialEq, Eq)]
pub struct FirestoreSettings {
    pub base_url: String,
    pub project_id: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for FirestoreSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirestoreSettings")
            .field("base_url", &self.base_url)
            .field("project_id", &self.project_id)
            .field("api_key", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "nurseconnect", "nurse-connect")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the config file and the environment
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load configuration from `path`, falling back to defaults when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Override settings from `NURSE_CONNECT_*` variables provided by `lookup`
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let overrides: [(&str, &mut Option<String>); 7] = [
            ("NURSE_CONNECT_API_KEY", &mut self.store.api_key),
            ("NURSE_CONNECT_AUTH_DOMAIN", &mut self.store.auth_domain),
            ("NURSE_CONNECT_PROJECT_ID", &mut self.store.project_id),
            ("NURSE_CONNECT_STORAGE_BUCKET", &mut self.store.storage_bucket),
            (
                "NURSE_CONNECT_MESSAGING_SENDER_ID",
                &mut self.store.messaging_sender_id,
            ),
            ("NURSE_CONNECT_APP_ID", &mut self.store.app_id),
            ("NURSE_CONNECT_FIRESTORE_URL", &mut self.firestore_url),
        ];
        for (key, slot) in overrides {
            if let Some(value) = lookup(key).filter(|v| !v.is_empty()) {
                *slot = Some(value);
            }
        }
        if let Some(secs) = lookup("NURSE_CONNECT_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
            self.timeout_secs = Some(secs);
        }
    }

    /// Firestore settings, or `None` when the project id or API key is missing
    pub fn firestore(&self) -> Option<FirestoreSettings> {
        let project_id = self.store.project_id.clone().filter(|s| !s.is_empty())?;
        let api_key = self.store.api_key.clone().filter(|s| !s.is_empty())?;
        Some(FirestoreSettings {
            base_url: self
                .firestore_url
                .clone()
                .unwrap_or_else(|| crate::store::FIRESTORE_URL.to_string()),
            project_id,
            api_key,
            timeout: Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config_has_no_firestore() {
        let config = AppConfig::default();
        assert!(config.store.api_key.is_none());
        assert!(config.firestore().is_none());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "store": { "apiKey": "k", "projectId": "nurse-connect", "appId": "1:2:web:3" },
            "timeoutSecs": 5
        }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.store.project_id.as_deref(), Some("nurse-connect"));
        assert_eq!(config.store.app_id.as_deref(), Some("1:2:web:3"));
        assert_eq!(config.timeout_secs, Some(5));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = AppConfig {
            store: StoreCredentials {
                project_id: Some("from-file".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        config.apply_env(env(&[
            ("NURSE_CONNECT_PROJECT_ID", "from-env"),
            ("NURSE_CONNECT_API_KEY", "key"),
            ("NURSE_CONNECT_TIMEOUT_SECS", "3"),
        ]));

        let settings = config.firestore().unwrap();
        assert_eq!(settings.project_id, "from-env");
        assert_eq!(settings.api_key, "key");
        assert_eq!(settings.timeout, Duration::from_secs(3));
        assert_eq!(settings.base_url, crate::store::FIRESTORE_URL);
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let mut config = AppConfig::default();
        config.store.api_key = Some("file-key".into());
        config.apply_env(env(&[("NURSE_CONNECT_API_KEY", "")]));
        assert_eq!(config.store.api_key.as_deref(), Some("file-key"));
    }

    #[test]
    fn test_firestore_requires_key_and_project() {
        let mut config = AppConfig::default();
        config.store.project_id = Some("p".into());
        assert!(config.firestore().is_none());
        config.store.api_key = Some(String::new());
        assert!(config.firestore().is_none());
        config.store.api_key = Some("k".into());
        assert!(config.firestore().is_some());
    }

    #[test]
    fn test_url_override() {
        let mut config = AppConfig::default();
        config.apply_env(env(&[
            ("NURSE_CONNECT_PROJECT_ID", "p"),
            ("NURSE_CONNECT_API_KEY", "k"),
            ("NURSE_CONNECT_FIRESTORE_URL", "http://localhost:8080"),
        ]));
        assert_eq!(config.firestore().unwrap().base_url, "http://localhost:8080");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let creds = StoreCredentials {
            api_key: Some("AIza-secret".into()),
            ..Default::default()
        };
        let debug = format!("{creds:?}");
        assert!(!debug.contains("AIza-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let config = AppConfig::load_from(Path::new("/nonexistent/nurse-connect.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_invalid_file_errors() {
        let path = std::env::temp_dir().join(format!("nurse-connect-bad-{}.json", std::process::id()));
        fs::write(&path, "not json").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
        fs::remove_file(&path).unwrap();
    }
}
