use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::StateError;

#[derive(Debug, Clone)]
pub struct Config {
    pub opentopodata_url: String,
    pub elevation_primary_dataset: String,
    pub elevation_fallback_dataset: String,
    /// IANA zone name that skips the per-location lookup when set.
    pub timezone: Option<String>,
    pub strava_api_url: String,
    pub strava_oauth_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let var = |name: &str, default: &str| {
            std::env::var(name)
                .ok()
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let timezone = std::env::var("CTB_TIMEZONE")
            .ok()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        Self {
            opentopodata_url: var("OPENTOPODATA_URL", "https://api.opentopodata.org/v1"),
            elevation_primary_dataset: var("ELEVATION_PRIMARY_DATASET", "eudem25m"),
            elevation_fallback_dataset: var("ELEVATION_FALLBACK_DATASET", "mapzen"),
            timezone,
            strava_api_url: var("STRAVA_API_URL", "https://www.strava.com/api/v3"),
            strava_oauth_url: var("STRAVA_OAUTH_URL", "https://www.strava.com/oauth"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StravaCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

/// Persisted exporter state: Strava credentials and the start time of the
/// last exported session. Keys this crate does not know are written back
/// untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportState {
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_export: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ExportState {
    pub fn load(path: &Path) -> Result<Self, StateError> {
        let bytes = std::fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), StateError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn credentials(&self) -> Result<StravaCredentials, StateError> {
        let field = |value: &Option<String>, name: &'static str| {
            value
                .clone()
                .filter(|value| !value.is_empty())
                .ok_or(StateError::MissingField(name))
        };
        Ok(StravaCredentials {
            client_id: field(&self.client_id, "client_id")?,
            client_secret: field(&self.client_secret, "client_secret")?,
            refresh_token: field(&self.refresh_token, "refresh_token")?,
        })
    }
}

/// Strava hands out numeric client ids; accept them either way.
fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(value)) => Some(value),
        Some(Value::Number(value)) => Some(value.to_string()),
        _ => None,
    })
}
