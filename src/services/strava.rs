use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::config::{Config, StravaCredentials};
use crate::error::ServiceError;
use crate::pipeline::gpx;
use crate::services::{ensure_success, transport, UploadSink};
use crate::types::activity::{Activity, UploadOutcome};

const SERVICE: &str = "Strava";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: Option<String>,
}

/// Uploads GPX activities to Strava with a refreshed access token.
#[derive(Debug, Clone)]
pub struct StravaClient {
    client: reqwest::Client,
    api_url: String,
    access_token: String,
    refresh_token: String,
}

impl StravaClient {
    /// Exchanges the stored refresh token for an access token.
    pub async fn authorize(
        config: &Config,
        credentials: &StravaCredentials,
    ) -> Result<Self, ServiceError> {
        let client = reqwest::Client::new();
        let url = format!("{}/token", config.strava_oauth_url.trim_end_matches('/'));
        let response = client
            .post(&url)
            .form(&[
                ("client_id", credentials.client_id.as_str()),
                ("client_secret", credentials.client_secret.as_str()),
                ("refresh_token", credentials.refresh_token.as_str()),
                ("grant_type", "refresh_token"),
            ])
            .send()
            .await
            .map_err(transport(SERVICE))?;

        let token: TokenResponse = ensure_success(SERVICE, response)
            .await?
            .json()
            .await
            .map_err(transport(SERVICE))?;

        tracing::info!("Obtained Strava access token");

        Ok(Self {
            client,
            api_url: config.strava_api_url.trim_end_matches('/').to_string(),
            access_token: token.access_token,
            refresh_token: token
                .refresh_token
                .unwrap_or_else(|| credentials.refresh_token.clone()),
        })
    }

    /// Refresh token to persist; Strava may rotate it on every exchange.
    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}

impl UploadSink for StravaClient {
    async fn upload(&self, activity: &Activity) -> Result<UploadOutcome, ServiceError> {
        let file = Part::bytes(gpx::encode(activity)?)
            .file_name(format!("session-{}.gpx", activity.session_id))
            .mime_str("application/gpx+xml")
            .map_err(transport(SERVICE))?;
        let form = Form::new()
            .part("file", file)
            .text("data_type", "gpx")
            .text("name", activity.title.clone())
            .text("description", activity.description.clone())
            .text("external_id", format!("ctb-session-{}", activity.session_id));

        let response = self
            .client
            .post(format!("{}/uploads", self.api_url))
            .bearer_auth(&self.access_token)
            .multipart(form)
            .send()
            .await
            .map_err(transport(SERVICE))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport(SERVICE))?;
        Ok(UploadOutcome { status, body })
    }
}
