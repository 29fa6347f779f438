use crate::types::climbing::{Discipline, GradingSystem, Style};

#[derive(Debug, thiserror::Error)]
pub enum BackupError {
    #[error("Failed to read backup file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid backup JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Session {session_id} references unknown location {location_id}")]
    MissingLocation { session_id: i64, location_id: i64 },
    #[error("Session {session_id} has an invalid timestamp '{value}'")]
    InvalidTimestamp { session_id: i64, value: String },
    #[error("Invalid export checkpoint '{0}'")]
    InvalidCheckpoint(String),
}

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("Route {route_id}: unknown discipline '{code}'")]
    UnknownDiscipline { route_id: i64, code: String },
    #[error("Route {route_id}: unknown style code {code}")]
    UnknownStyle { route_id: i64, code: u32 },
    #[error("Route {route_id}: style {style:?} is not used for {discipline:?}")]
    UnsupportedStyle {
        route_id: i64,
        discipline: Discipline,
        style: Style,
    },
    #[error("Route {route_id}: unknown grade code {code}")]
    UnknownGrade { route_id: i64, code: u32 },
    #[error("Route {route_id}: grade code {code} has no {system:?} label")]
    MissingGradeLabel {
        route_id: i64,
        code: u32,
        system: GradingSystem,
    },
    #[error("Route {route_id}: grade code {code} has no label usable for {discipline:?}")]
    NoPreferredGradeLabel {
        route_id: i64,
        code: u32,
        discipline: Discipline,
    },
    #[error("Route {route_id}: unknown grading system '{name}'")]
    UnknownGradingSystem { route_id: i64, name: String },
    #[error("Route {route_id}: variant code {code:?} is not defined for {discipline:?}")]
    UnknownVariant {
        route_id: i64,
        discipline: Discipline,
        code: Option<u32>,
    },
    #[error("Route {route_id}: speed route without elapsed time")]
    MissingSpeedTime { route_id: i64 },
}

#[derive(Debug, thiserror::Error)]
pub enum TrackError {
    #[error("Unknown timezone '{0}'")]
    UnknownTimezone(String),
    #[error("Local time {time} does not exist in {zone}")]
    NonexistentLocalTime { time: String, zone: String },
    #[error("Session ends before it starts ({start} > {end})")]
    InvertedWindow { start: String, end: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Request to {service} failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{service} responded with {status}: {body}")]
    Status {
        service: &'static str,
        status: u16,
        body: String,
    },
    #[error("Unexpected {service} response: {message}")]
    Payload {
        service: &'static str,
        message: String,
    },
    #[error("No elevation available at {lat},{lon}")]
    NoElevation { lat: f64, lon: f64 },
    #[error("Failed to write track file: {0}")]
    Io(#[from] std::io::Error),
    #[error("GPX encoding failed: {0}")]
    Encode(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("Failed to access state file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid state file: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("State file is missing '{0}'")]
    MissingField(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Backup(#[from] BackupError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Track(#[from] TrackError),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    State(#[from] StateError),
}
