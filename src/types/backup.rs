use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::BackupError;
use crate::types::activity::Coordinate;

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Climbing Tracker backup export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Backup {
    #[serde(default)]
    pub sessions: Vec<SessionRecord>,
    #[serde(default)]
    pub locations: Vec<LocationRecord>,
    #[serde(default)]
    pub routes: Vec<RouteRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub session_id: i64,
    pub location_id: i64,
    pub time_start: String,
    pub time_end: String,
    #[serde(default)]
    pub session_comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationRecord {
    pub location_id: i64,
    pub location_name: String,
    #[serde(default)]
    pub location_outdoor: u8,
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationRecord {
    pub fn is_outdoor(&self) -> bool {
        self.location_outdoor == 1
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            lat: self.latitude,
            lon: self.longitude,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRecord {
    #[serde(default)]
    pub route_id: i64,
    pub session_id: i64,
    pub ascend_order: i64,
    pub route_type: String,
    pub style_id: u32,
    pub grade_id: u32,
    #[serde(default)]
    pub ascend_height: f64,
    #[serde(default)]
    pub route_name: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub top_rope: Option<u32>,
    #[serde(default)]
    pub speed_type: Option<u32>,
    /// Elapsed time of a speed ascent in seconds.
    #[serde(default)]
    pub speed_time: Option<f64>,
    #[serde(default)]
    pub grade_system: Option<String>,
}

/// A session with its location and routes resolved.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: i64,
    /// Raw start value, kept verbatim as the export checkpoint.
    pub time_start: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub comment: String,
    pub location: LocationRecord,
    /// Sorted by ascend order.
    pub routes: Vec<RouteRecord>,
}

impl Backup {
    pub fn load(path: &Path) -> Result<Self, BackupError> {
        let bytes = std::fs::read(path)?;
        Self::from_slice(&bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, BackupError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn location(&self, location_id: i64) -> Option<&LocationRecord> {
        self.locations
            .iter()
            .find(|location| location.location_id == location_id)
    }

    pub fn routes_of(&self, session_id: i64) -> Vec<RouteRecord> {
        let mut routes: Vec<RouteRecord> = self
            .routes
            .iter()
            .filter(|route| route.session_id == session_id)
            .cloned()
            .collect();
        routes.sort_by_key(|route| route.ascend_order);
        routes
    }

    pub fn session(&self, record: &SessionRecord) -> Result<Session, BackupError> {
        let location = self
            .location(record.location_id)
            .ok_or(BackupError::MissingLocation {
                session_id: record.session_id,
                location_id: record.location_id,
            })?;

        Ok(Session {
            id: record.session_id,
            time_start: record.time_start.clone(),
            start: session_timestamp(record.session_id, &record.time_start)?,
            end: session_timestamp(record.session_id, &record.time_end)?,
            comment: record.session_comment.clone().unwrap_or_default(),
            location: location.clone(),
            routes: self.routes_of(record.session_id),
        })
    }

    /// Sessions started strictly after `checkpoint`, oldest first. Without a
    /// checkpoint every session is new.
    pub fn sessions_after(&self, checkpoint: Option<&str>) -> Result<Vec<Session>, BackupError> {
        let checkpoint = checkpoint
            .filter(|value| !value.trim().is_empty())
            .map(|value| {
                parse_timestamp(value)
                    .ok_or_else(|| BackupError::InvalidCheckpoint(value.to_string()))
            })
            .transpose()?;

        let mut sessions = Vec::new();
        for record in &self.sessions {
            let start = session_timestamp(record.session_id, &record.time_start)?;
            if checkpoint.map_or(true, |checkpoint| start > checkpoint) {
                sessions.push(self.session(record)?);
            }
        }
        sessions.sort_by_key(|session| session.start);
        Ok(sessions)
    }
}

pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value.trim(), format).ok())
}

fn session_timestamp(session_id: i64, value: &str) -> Result<NaiveDateTime, BackupError> {
    parse_timestamp(value).ok_or_else(|| BackupError::InvalidTimestamp {
        session_id,
        value: value.to_string(),
    })
}
