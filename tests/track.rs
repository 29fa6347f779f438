use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use ctb2strava_rs::error::TrackError;
use ctb2strava_rs::pipeline::track::{self, bump_elevation, TrackSynthesizer, LOOP_RADIUS_M};
use ctb2strava_rs::types::activity::{Coordinate, TrackPoint};
use geo::{Distance, Geodesic, Haversine, Point};

const ANCHOR: Coordinate = Coordinate {
    lat: 47.2692,
    lon: 11.4041,
};

fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 4, h, m, s).unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

fn assert_strictly_increasing(points: &[TrackPoint]) {
    for pair in points.windows(2) {
        assert!(pair[0].time < pair[1].time);
    }
}

#[test]
fn one_bump_then_truncated_idle_loop() {
    let start = at(9, 0, 0);
    let end = at(9, 6, 30);

    let points = track::synthesize(ANCHOR, 1200.0, start, end, &[5.0]).expect("track");

    assert_eq!(points.len(), 390);
    assert_eq!(points[0].time, start);
    assert_eq!(points[359].time, at(9, 5, 59));
    assert_eq!(points[389].time, at(9, 6, 29));
    assert!(points.last().expect("last").time <= end);
    assert_strictly_increasing(&points);

    assert_close(points[180].elevation, 1205.0);
    for point in &points[360..] {
        assert_close(point.elevation, 1200.0);
    }
}

#[test]
fn bump_profile_follows_quadrants() {
    let mut synthesizer = TrackSynthesizer::new(ANCHOR, 100.0, at(9, 0, 0), at(10, 0, 0));
    let outcome = synthesizer.bump_loop(9.0);

    assert!(!outcome.exhausted);
    assert_eq!(outcome.points.len(), 360);

    let elevations: Vec<f64> = outcome.points.iter().map(|p| p.elevation).collect();
    for bearing in 0..90 {
        assert_close(elevations[bearing], 100.0);
    }
    for bearing in 90..180 {
        assert_close(elevations[bearing], 100.0 + 9.0 * (bearing as f64 - 90.0) / 90.0);
    }
    for bearing in 180..270 {
        assert_close(elevations[bearing], 109.0);
    }
    for bearing in 270..360 {
        assert_close(
            elevations[bearing],
            109.0 - 9.0 * (bearing as f64 - 270.0) / 90.0,
        );
    }
    assert_close(bump_elevation(100.0, 9.0, 135), 104.5);

    let idle = synthesizer.idle_loop();
    assert_eq!(idle.points[0].time, at(9, 6, 0));
}

#[test]
fn sub_second_window_is_empty() {
    let start = at(9, 0, 0);
    let points = track::synthesize(ANCHOR, 0.0, start, start + Duration::milliseconds(999), &[3.0])
        .expect("track");
    assert!(points.is_empty());

    let points = track::synthesize(ANCHOR, 0.0, start, start, &[]).expect("track");
    assert!(points.is_empty());
}

#[test]
fn truncation_inside_bump_stops_everything() {
    let start = at(9, 0, 0);
    let end = start + Duration::seconds(100);

    let points = track::synthesize(ANCHOR, 50.0, start, end, &[10.0, 20.0]).expect("track");

    assert_eq!(points.len(), 100);
    assert_close(points[99].elevation, 50.0 + 10.0 * 9.0 / 90.0);

    let mut synthesizer = TrackSynthesizer::new(ANCHOR, 50.0, start, end);
    let outcome = synthesizer.bump_loop(10.0);
    assert!(outcome.exhausted);
    assert_eq!(outcome.points.len(), 100);
    let outcome = synthesizer.idle_loop();
    assert!(outcome.exhausted);
    assert!(outcome.points.is_empty());
}

#[test]
fn several_bumps_then_idle_padding() {
    let start = at(9, 0, 0);
    let end = start + Duration::seconds(360 * 4 + 10);

    let points = track::synthesize(ANCHOR, 0.0, start, end, &[4.0, 8.0]).expect("track");

    assert_eq!(points.len(), 360 * 4 + 10);
    assert_close(points[200].elevation, 4.0);
    assert_close(points[360 + 200].elevation, 8.0);
    assert!(points[720..].iter().all(|p| p.elevation == 0.0));
    assert_strictly_increasing(&points);
}

#[test]
fn points_circle_the_anchor() {
    let start = at(9, 0, 0);
    let points = track::synthesize(ANCHOR, 0.0, start, start + Duration::seconds(360), &[])
        .expect("track");

    for point in &points {
        let position = Point::new(point.lon, point.lat);
        let geodesic = Geodesic::distance(Point::new(ANCHOR.lon, ANCHOR.lat), position);
        assert!((geodesic - LOOP_RADIUS_M).abs() < 1e-6, "distance {}", geodesic);
        let haversine = Haversine::distance(Point::new(ANCHOR.lon, ANCHOR.lat), position);
        assert!((haversine - LOOP_RADIUS_M).abs() < 0.2, "distance {}", haversine);
    }
    assert!(points[0].lat > ANCHOR.lat);
    assert!((points[0].lon - ANCHOR.lon).abs() < 1e-9);
    assert!(points[90].lon > ANCHOR.lon);
    assert!(points[180].lat < ANCHOR.lat);
    assert!(points[270].lon < ANCHOR.lon);
}

#[test]
fn loop_on_equator_follows_ellipsoid() {
    let origin = Coordinate { lat: 0.0, lon: 0.0 };
    let start = at(9, 0, 0);
    let points = track::synthesize(origin, 0.0, start, start + Duration::seconds(360), &[])
        .expect("track");

    let east = &points[90];
    assert!(east.lat.abs() < 1e-9);
    assert!((east.lon - (25.0f64 / 6_378_137.0).to_degrees()).abs() < 1e-10);

    let north = &points[0];
    assert!((north.lat - 25.0 / 110_574.0).abs() < 1e-6);
    assert!(north.lon.abs() < 1e-9);
}

#[test]
fn local_times_convert_to_utc() {
    let vienna = track::parse_zone("Europe/Vienna").expect("zone");

    let summer = NaiveDate::from_ymd_opt(2023, 7, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    assert_eq!(
        track::to_utc(summer, vienna).expect("utc"),
        Utc.with_ymd_and_hms(2023, 7, 1, 7, 0, 0).unwrap()
    );

    let fold = NaiveDate::from_ymd_opt(2023, 10, 29)
        .unwrap()
        .and_hms_opt(2, 30, 0)
        .unwrap();
    assert_eq!(
        track::to_utc(fold, vienna).expect("utc"),
        Utc.with_ymd_and_hms(2023, 10, 29, 0, 30, 0).unwrap()
    );

    let gap = NaiveDate::from_ymd_opt(2023, 3, 26)
        .unwrap()
        .and_hms_opt(2, 30, 0)
        .unwrap();
    assert!(matches!(
        track::to_utc(gap, vienna),
        Err(TrackError::NonexistentLocalTime { .. })
    ));

    assert!(matches!(
        track::parse_zone("Mars/Olympus_Mons"),
        Err(TrackError::UnknownTimezone(_))
    ));
}

#[test]
fn inverted_window_is_rejected() {
    assert!(matches!(
        track::synthesize(ANCHOR, 0.0, at(10, 0, 0), at(9, 0, 0), &[]),
        Err(TrackError::InvertedWindow { .. })
    ));
}
