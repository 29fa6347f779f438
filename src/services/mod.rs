pub mod elevation;
pub mod files;
pub mod strava;
pub mod timezone;

use chrono_tz::Tz;

use crate::error::{BackupError, ServiceError, TrackError};
use crate::types::activity::{Activity, Coordinate, UploadOutcome};
use crate::types::backup::{Backup, Session};

/// Sessions started after a checkpoint, oldest first.
pub trait SessionSource {
    fn sessions_after(&self, checkpoint: Option<&str>) -> Result<Vec<Session>, BackupError>;
}

impl SessionSource for Backup {
    fn sessions_after(&self, checkpoint: Option<&str>) -> Result<Vec<Session>, BackupError> {
        Backup::sessions_after(self, checkpoint)
    }
}

/// Terrain elevation in meters at a coordinate.
#[allow(async_fn_in_trait)]
pub trait ElevationService {
    async fn elevation(&self, at: Coordinate) -> Result<f64, ServiceError>;
}

/// IANA zone the backup's wall-clock times were recorded in.
pub trait TimezoneResolver {
    fn timezone(&self, at: Coordinate) -> Result<Tz, TrackError>;
}

#[allow(async_fn_in_trait)]
pub trait UploadSink {
    async fn upload(&self, activity: &Activity) -> Result<UploadOutcome, ServiceError>;
}

fn transport(service: &'static str) -> impl FnOnce(reqwest::Error) -> ServiceError {
    move |source| ServiceError::Transport { service, source }
}

async fn ensure_success(
    service: &'static str,
    response: reqwest::Response,
) -> Result<reqwest::Response, ServiceError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(ServiceError::Status {
        service,
        status,
        body,
    })
}
