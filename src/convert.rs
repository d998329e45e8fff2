use crate::error::ZwegError;
use crate::gpx::{GpxDocument, Metadata, Track, TrackSegment, Waypoint};
use crate::point::Point;

/// Substituted when no track name is given.
pub const DEFAULT_TRACK_NAME: &str = "Track";

/// Construction-time configuration for [`GpxConverter`].
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// GPX version attribute.
    pub version: String,
    /// Creator attribute identifying this tool.
    pub creator: String,
    /// Emit Start/Goal waypoints for the track endpoints.
    pub include_waypoints: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            version: "1.1".to_string(),
            creator: "zweg - ZweiteGPS to GPX Converter".to_string(),
            include_waypoints: true,
        }
    }
}

/// Maps an ordered sequence of points onto a GPX document: metadata,
/// optional endpoint waypoints, and one track with one segment.
#[derive(Debug, Default)]
pub struct GpxConverter {
    config: ConvertConfig,
}

impl GpxConverter {
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    /// Convert points into a GPX document.
    ///
    /// Track point order follows input order. A single unparsable altitude
    /// anywhere in the track aborts the conversion; it never silently
    /// defaults to zero. Speed, course, headings, and distance are decoded
    /// from the input but intentionally not re-serialized.
    pub fn convert(&self, points: &[Point], track_name: &str) -> Result<GpxDocument, ZwegError> {
        if points.is_empty() {
            // The reader already rejects empty input.
            return Err(ZwegError::NoData);
        }

        let track_name = if track_name.is_empty() {
            DEFAULT_TRACK_NAME
        } else {
            track_name
        };

        let mut doc = GpxDocument {
            version: self.config.version.clone(),
            creator: self.config.creator.clone(),
            metadata: Some(Metadata {
                name: track_name.to_string(),
                time: points[0].timestamp()?,
            }),
            waypoints: Vec::new(),
            tracks: Vec::new(),
        };

        if self.config.include_waypoints {
            doc.waypoints.push(endpoint_waypoint(&points[0], "Start")?);
            doc.waypoints
                .push(endpoint_waypoint(&points[points.len() - 1], "Goal")?);
        }

        let mut segment = TrackSegment::default();
        for point in points {
            segment.points.push(Waypoint {
                lat: point.la,
                lon: point.lo,
                ele: point.altitude()?,
                time: point.timestamp()?,
                name: None,
            });
        }

        doc.tracks.push(Track {
            name: track_name.to_string(),
            segments: vec![segment],
        });

        Ok(doc)
    }
}

fn endpoint_waypoint(point: &Point, name: &str) -> Result<Waypoint, ZwegError> {
    Ok(Waypoint {
        lat: point.la,
        lon: point.lo,
        ele: point.altitude()?,
        time: point.timestamp()?,
        name: Some(name.to_string()),
    })
}
