use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use geo::{Destination, Geodesic, Point};

use crate::error::TrackError;
use crate::types::activity::{Coordinate, TrackPoint};

pub const LOOP_RADIUS_M: f64 = 25.0;
pub const POINTS_PER_LOOP: u16 = 360;

/// Points produced by one loop attempt.
#[derive(Debug, Clone, Default)]
pub struct LoopOutcome {
    pub points: Vec<TrackPoint>,
    /// The end of the window was reached before the loop closed.
    pub exhausted: bool,
}

/// Walks 25 m circles around an anchor, one bearing degree per second,
/// until the session window runs out.
#[derive(Debug, Clone)]
pub struct TrackSynthesizer {
    anchor: Coordinate,
    floor: f64,
    end: DateTime<Utc>,
    clock: DateTime<Utc>,
}

impl TrackSynthesizer {
    pub fn new(anchor: Coordinate, floor: f64, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            anchor,
            floor,
            end,
            clock: start,
        }
    }

    /// A point owns the second starting at its timestamp, so it fits only
    /// when that second ends within the window.
    fn fits(&self) -> bool {
        self.clock + Duration::seconds(1) <= self.end
    }

    fn trace(&mut self, elevation_at: impl Fn(u16) -> f64) -> LoopOutcome {
        let mut outcome = LoopOutcome {
            points: Vec::with_capacity(usize::from(POINTS_PER_LOOP)),
            exhausted: false,
        };

        for bearing in 0..POINTS_PER_LOOP {
            if !self.fits() {
                outcome.exhausted = true;
                break;
            }
            let position = Geodesic::destination(
                Point::new(self.anchor.lon, self.anchor.lat),
                f64::from(bearing),
                LOOP_RADIUS_M,
            );
            outcome.points.push(TrackPoint {
                lat: position.y(),
                lon: position.x(),
                elevation: elevation_at(bearing),
                time: self.clock,
            });
            self.clock += Duration::seconds(1);
        }

        outcome
    }

    /// One revolution rising `height` meters above the floor: flat over the
    /// first quadrant, up over the second, on top over the third, down over
    /// the fourth.
    pub fn bump_loop(&mut self, height: f64) -> LoopOutcome {
        let floor = self.floor;
        self.trace(|bearing| bump_elevation(floor, height, bearing))
    }

    /// One revolution at floor elevation.
    pub fn idle_loop(&mut self) -> LoopOutcome {
        let floor = self.floor;
        self.trace(|_| floor)
    }

    /// Emits one bump loop per height, then idle loops until the window is
    /// used up.
    pub fn synthesize(mut self, heights: &[f64]) -> Vec<TrackPoint> {
        let mut points = Vec::new();

        for height in heights {
            let outcome = self.bump_loop(*height);
            points.extend(outcome.points);
            if outcome.exhausted {
                return points;
            }
        }

        loop {
            let outcome = self.idle_loop();
            points.extend(outcome.points);
            if outcome.exhausted {
                return points;
            }
        }
    }
}

pub fn bump_elevation(floor: f64, height: f64, bearing: u16) -> f64 {
    let bearing = f64::from(bearing);
    match bearing {
        b if b < 90.0 => floor,
        b if b < 180.0 => floor + height * (b - 90.0) / 90.0,
        b if b < 270.0 => floor + height,
        b => floor + height - height * (b - 270.0) / 90.0,
    }
}

/// Session window for a floor elevation and ascend-ordered bump heights.
pub fn synthesize(
    anchor: Coordinate,
    floor: f64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    heights: &[f64],
) -> Result<Vec<TrackPoint>, TrackError> {
    if end < start {
        return Err(TrackError::InvertedWindow {
            start: start.to_rfc3339(),
            end: end.to_rfc3339(),
        });
    }
    let points = TrackSynthesizer::new(anchor, floor, start, end).synthesize(heights);
    tracing::debug!(
        "Synthesized {} points between {} and {}",
        points.len(),
        start,
        end
    );
    Ok(points)
}

pub fn parse_zone(name: &str) -> Result<Tz, TrackError> {
    name.parse::<Tz>()
        .map_err(|_| TrackError::UnknownTimezone(name.to_string()))
}

/// Interprets a backup wall-clock time in `zone`. Ambiguous times (DST fold)
/// resolve to the earlier instant.
pub fn to_utc(local: NaiveDateTime, zone: Tz) -> Result<DateTime<Utc>, TrackError> {
    match zone.from_local_datetime(&local) {
        LocalResult::Single(time) => Ok(time.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => Err(TrackError::NonexistentLocalTime {
            time: local.to_string(),
            zone: zone.name().to_string(),
        }),
    }
}
