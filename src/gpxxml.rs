use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::error::ZwegError;
use crate::gpx::{GpxDocument, Waypoint};

const GPX_NAMESPACE: &str = "http://www.topografix.com/GPX/1/1";

/// GPX timestamps are always whole-second UTC.
const TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z");

/// Serializes a [`GpxDocument`] as indented GPX 1.1 XML, starting with an
/// explicit XML declaration on its own line.
#[derive(Debug, Clone)]
pub struct GpxWriter {
    indent: usize,
}

impl Default for GpxWriter {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

impl GpxWriter {
    /// Create a writer with the given indentation width in spaces.
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }

    /// Write the document to a file, creating it if necessary.
    pub fn write_file(&self, path: &Path, doc: &GpxDocument) -> Result<(), ZwegError> {
        let file = File::create(path).map_err(|source| ZwegError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        self.write_to(BufWriter::new(file), doc)
    }

    /// Write the document to any output sink.
    pub fn write_to<W: Write>(&self, out: W, doc: &GpxDocument) -> Result<(), ZwegError> {
        let mut writer = Writer::new_with_indent(out, b' ', self.indent);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", None, None)))?;

        let mut gpx = BytesStart::new("gpx");
        gpx.push_attribute(("version", doc.version.as_str()));
        gpx.push_attribute(("creator", doc.creator.as_str()));
        gpx.push_attribute(("xmlns", GPX_NAMESPACE));
        writer.write_event(Event::Start(gpx))?;

        if let Some(metadata) = &doc.metadata {
            writer.write_event(Event::Start(BytesStart::new("metadata")))?;
            write_text_element(&mut writer, "name", &metadata.name)?;
            write_text_element(&mut writer, "time", &format_time(metadata.time)?)?;
            writer.write_event(Event::End(BytesEnd::new("metadata")))?;
        }

        for waypoint in &doc.waypoints {
            write_waypoint(&mut writer, "wpt", waypoint)?;
        }

        for track in &doc.tracks {
            writer.write_event(Event::Start(BytesStart::new("trk")))?;
            write_text_element(&mut writer, "name", &track.name)?;
            for segment in &track.segments {
                writer.write_event(Event::Start(BytesStart::new("trkseg")))?;
                for point in &segment.points {
                    write_waypoint(&mut writer, "trkpt", point)?;
                }
                writer.write_event(Event::End(BytesEnd::new("trkseg")))?;
            }
            writer.write_event(Event::End(BytesEnd::new("trk")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("gpx")))?;
        Ok(())
    }
}

fn write_waypoint<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    waypoint: &Waypoint,
) -> Result<(), ZwegError> {
    let lat = waypoint.lat.to_string();
    let lon = waypoint.lon.to_string();

    let mut start = BytesStart::new(tag);
    start.push_attribute(("lat", lat.as_str()));
    start.push_attribute(("lon", lon.as_str()));
    writer.write_event(Event::Start(start))?;

    // Schema order: ele, time, name.
    write_text_element(writer, "ele", &waypoint.ele.to_string())?;
    write_text_element(writer, "time", &format_time(waypoint.time)?)?;
    if let Some(name) = &waypoint.name {
        write_text_element(writer, "name", name)?;
    }

    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    text: &str,
) -> Result<(), ZwegError> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

fn format_time(time: OffsetDateTime) -> Result<String, ZwegError> {
    Ok(time.format(&TIME_FORMAT)?)
}
