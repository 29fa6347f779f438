use chrono_tz::Tz;
use tzf_rs::DefaultFinder;

use crate::config::Config;
use crate::error::TrackError;
use crate::pipeline::track::parse_zone;
use crate::services::TimezoneResolver;
use crate::types::activity::Coordinate;

/// Looks the zone up in the bundled timezone boundary polygons.
pub struct OfflineTimezone {
    finder: DefaultFinder,
}

impl OfflineTimezone {
    pub fn new() -> Self {
        Self {
            finder: DefaultFinder::new(),
        }
    }
}

impl Default for OfflineTimezone {
    fn default() -> Self {
        Self::new()
    }
}

impl TimezoneResolver for OfflineTimezone {
    fn timezone(&self, at: Coordinate) -> Result<Tz, TrackError> {
        let name = self.finder.get_tz_name(at.lon, at.lat);
        tracing::debug!("Resolved {},{} to zone '{}'", at.lat, at.lon, name);
        parse_zone(name)
    }
}

/// Same zone for every location.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimezone(pub Tz);

impl TimezoneResolver for FixedTimezone {
    fn timezone(&self, _at: Coordinate) -> Result<Tz, TrackError> {
        Ok(self.0)
    }
}

/// Resolver picked at startup from configuration.
pub enum Timezones {
    Fixed(FixedTimezone),
    Offline(OfflineTimezone),
}

impl Timezones {
    /// Fails on a `CTB_TIMEZONE` override that names no IANA zone.
    pub fn from_config(config: &Config) -> Result<Self, TrackError> {
        match config.timezone.as_deref() {
            Some(name) => Ok(Timezones::Fixed(FixedTimezone(parse_zone(name)?))),
            None => Ok(Timezones::Offline(OfflineTimezone::new())),
        }
    }
}

impl TimezoneResolver for Timezones {
    fn timezone(&self, at: Coordinate) -> Result<Tz, TrackError> {
        match self {
            Timezones::Fixed(fixed) => fixed.timezone(at),
            Timezones::Offline(offline) => offline.timezone(at),
        }
    }
}
