use chrono::{TimeZone, Utc};
use ctb2strava_rs::pipeline::gpx;
use ctb2strava_rs::types::activity::{Activity, TrackPoint, ROCK_CLIMBING};

fn sample_activity() -> Activity {
    let start = Utc.with_ymd_and_hms(2024, 5, 4, 9, 0, 0).unwrap();
    Activity {
        session_id: 12,
        title: "🧗 Indoor climbing / Rock & Roll".to_string(),
        description: "Total ascents: 01\nMost difficult: \n - Sport climbing [S]: 6a".to_string(),
        activity_type: ROCK_CLIMBING,
        points: vec![
            TrackPoint {
                lat: 47.0,
                lon: 11.0,
                elevation: 1200.0,
                time: start,
            },
            TrackPoint {
                lat: 47.0000039,
                lon: 11.0000058,
                elevation: 1200.5,
                time: start + chrono::Duration::seconds(1),
            },
        ],
    }
}

#[test]
fn encodes_track_with_metadata() {
    let bytes = gpx::encode(&sample_activity()).expect("gpx");
    let text = String::from_utf8(bytes).expect("utf8");

    assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(text.contains("<gpx version=\"1.1\" creator=\"ctb2strava-rs\""));
    assert!(text.contains("<name>🧗 Indoor climbing / Rock &amp; Roll</name>"));
    assert!(text.contains("<type>RockClimbing</type>"));
    assert!(text.contains("<trkpt lat=\"47.0000000\" lon=\"11.0000000\">"));
    assert!(text.contains("<ele>1200.50</ele>"));
    assert!(text.contains("<time>2024-05-04T09:00:01Z</time>"));
    assert_eq!(text.matches("<trkpt ").count(), 2);
    assert!(text.trim_end().ends_with("</gpx>"));
}

#[test]
fn empty_track_still_encodes() {
    let mut activity = sample_activity();
    activity.points.clear();
    let text = String::from_utf8(gpx::encode(&activity).expect("gpx")).expect("utf8");
    assert!(!text.contains("<trkpt"));
    assert!(!text.contains("<metadata>"));
    assert!(text.contains("<trkseg>"));
}
