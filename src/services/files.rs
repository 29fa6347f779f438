use std::path::PathBuf;

use crate::error::ServiceError;
use crate::pipeline::gpx;
use crate::services::UploadSink;
use crate::types::activity::{Activity, UploadOutcome};

/// Writes each activity to `<dir>/session-<id>.gpx` instead of uploading.
#[derive(Debug, Clone)]
pub struct GpxDirectory {
    dir: PathBuf,
}

impl GpxDirectory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl UploadSink for GpxDirectory {
    async fn upload(&self, activity: &Activity) -> Result<UploadOutcome, ServiceError> {
        let bytes = gpx::encode(activity)?;
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(format!("session-{}.gpx", activity.session_id));
        tokio::fs::write(&path, &bytes).await?;
        Ok(UploadOutcome {
            status: 201,
            body: path.display().to_string(),
        })
    }
}
