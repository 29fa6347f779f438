use crate::error::AppError;
use crate::pipeline::{describe, track};
use crate::services::{ElevationService, TimezoneResolver, UploadSink};
use crate::types::activity::{Activity, UploadOutcome, ROCK_CLIMBING};
use crate::types::backup::Session;

/// Turns sessions into activities and hands them to a sink, one at a time.
pub struct Exporter<'a, E, T, U> {
    elevation: &'a E,
    timezones: &'a T,
    sink: &'a U,
}

impl<'a, E, T, U> Exporter<'a, E, T, U>
where
    E: ElevationService,
    T: TimezoneResolver,
    U: UploadSink,
{
    pub fn new(elevation: &'a E, timezones: &'a T, sink: &'a U) -> Self {
        Self {
            elevation,
            timezones,
            sink,
        }
    }

    pub async fn build_activity(&self, session: &Session) -> Result<Activity, AppError> {
        let anchor = session.location.coordinate();

        let description = describe::describe(&session.comment, &session.routes)?;
        let heights = describe::bump_heights(&session.routes)?;

        let zone = self.timezones.timezone(anchor)?;
        let start = track::to_utc(session.start, zone)?;
        let end = track::to_utc(session.end, zone)?;
        let floor = self.elevation.elevation(anchor).await?;

        let points = track::synthesize(anchor, floor, start, end, &heights)?;

        Ok(Activity {
            session_id: session.id,
            title: describe::title(&session.location),
            description,
            activity_type: ROCK_CLIMBING,
            points,
        })
    }

    pub async fn export_session(&self, session: &Session) -> Result<UploadOutcome, AppError> {
        let activity = self.build_activity(session).await?;
        tracing::info!(
            "Uploading session {} ({}, {} points)",
            session.id,
            activity.title,
            activity.points.len()
        );
        let outcome = self.sink.upload(&activity).await?;
        if outcome.is_success() {
            tracing::info!("Session {}: {} : {}", session.id, outcome.status, outcome.body);
        } else {
            tracing::warn!("Session {}: {} : {}", session.id, outcome.status, outcome.body);
        }
        Ok(outcome)
    }

    /// Exports `sessions` in order and returns the checkpoint to persist:
    /// the last session's start. Any failure aborts the run without a new
    /// checkpoint.
    pub async fn run(&self, sessions: &[Session]) -> Result<Option<String>, AppError> {
        for session in sessions {
            self.export_session(session).await?;
        }
        Ok(sessions.last().map(|session| session.time_start.clone()))
    }
}
