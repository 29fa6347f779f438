use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const ROCK_CLIMBING: &str = "RockClimbing";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    pub lat: f64,
    pub lon: f64,
    pub elevation: f64,
    pub time: DateTime<Utc>,
}

/// Everything handed to an upload sink for one session.
#[derive(Debug, Clone)]
pub struct Activity {
    pub session_id: i64,
    pub title: String,
    pub description: String,
    pub activity_type: &'static str,
    pub points: Vec<TrackPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadOutcome {
    pub status: u16,
    pub body: String,
}

impl UploadOutcome {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
