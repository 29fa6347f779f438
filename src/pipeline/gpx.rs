use std::io::Cursor;

use chrono::SecondsFormat;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::ServiceError;
use crate::types::activity::Activity;

const CREATOR: &str = "ctb2strava-rs";
const GPX_NAMESPACE: &str = "http://www.topografix.com/GPX/1/1";

type GpxWriter = Writer<Cursor<Vec<u8>>>;

/// Encodes an activity as a single-segment GPX 1.1 track.
pub fn encode(activity: &Activity) -> Result<Vec<u8>, ServiceError> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    write(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write(
        &mut writer,
        Event::Start(BytesStart::new("gpx").with_attributes([
            ("version", "1.1"),
            ("creator", CREATOR),
            ("xmlns", GPX_NAMESPACE),
        ])),
    )?;

    if let Some(first) = activity.points.first() {
        write(&mut writer, Event::Start(BytesStart::new("metadata")))?;
        text_element(
            &mut writer,
            "time",
            &first.time.to_rfc3339_opts(SecondsFormat::Secs, true),
        )?;
        write(&mut writer, Event::End(BytesEnd::new("metadata")))?;
    }

    write(&mut writer, Event::Start(BytesStart::new("trk")))?;
    text_element(&mut writer, "name", &activity.title)?;
    text_element(&mut writer, "desc", &activity.description)?;
    text_element(&mut writer, "type", activity.activity_type)?;
    write(&mut writer, Event::Start(BytesStart::new("trkseg")))?;

    for point in &activity.points {
        let lat = format!("{:.7}", point.lat);
        let lon = format!("{:.7}", point.lon);
        write(
            &mut writer,
            Event::Start(
                BytesStart::new("trkpt").with_attributes([("lat", lat.as_str()), ("lon", lon.as_str())]),
            ),
        )?;
        text_element(&mut writer, "ele", &format!("{:.2}", point.elevation))?;
        text_element(
            &mut writer,
            "time",
            &point.time.to_rfc3339_opts(SecondsFormat::Secs, true),
        )?;
        write(&mut writer, Event::End(BytesEnd::new("trkpt")))?;
    }

    write(&mut writer, Event::End(BytesEnd::new("trkseg")))?;
    write(&mut writer, Event::End(BytesEnd::new("trk")))?;
    write(&mut writer, Event::End(BytesEnd::new("gpx")))?;

    Ok(writer.into_inner().into_inner())
}

fn write(writer: &mut GpxWriter, event: Event<'_>) -> Result<(), ServiceError> {
    writer
        .write_event(event)
        .map_err(|e| ServiceError::Encode(e.to_string()))
}

fn text_element(writer: &mut GpxWriter, name: &str, text: &str) -> Result<(), ServiceError> {
    write(writer, Event::Start(BytesStart::new(name)))?;
    write(writer, Event::Text(BytesText::new(text)))?;
    write(writer, Event::End(BytesEnd::new(name)))
}
