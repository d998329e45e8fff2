use time::OffsetDateTime;

/// In-memory GPX 1.1 document.
///
/// Built once per conversion and handed to the writer; never mutated
/// afterwards.
#[derive(Debug, Clone)]
pub struct GpxDocument {
    pub version: String,
    pub creator: String,
    pub metadata: Option<Metadata>,
    pub waypoints: Vec<Waypoint>,
    pub tracks: Vec<Track>,
}

/// The `<metadata>` block: track name plus start time.
#[derive(Debug, Clone)]
pub struct Metadata {
    pub name: String,
    pub time: OffsetDateTime,
}

/// A single point, used both for standalone waypoints (`<wpt>`) and track
/// points (`<trkpt>`).
#[derive(Debug, Clone)]
pub struct Waypoint {
    pub lat: f64,
    pub lon: f64,
    pub ele: f64,
    pub time: OffsetDateTime,
    pub name: Option<String>,
}

/// A named track (`<trk>`).
#[derive(Debug, Clone)]
pub struct Track {
    pub name: String,
    pub segments: Vec<TrackSegment>,
}

/// A contiguous run of track points (`<trkseg>`).
#[derive(Debug, Clone, Default)]
pub struct TrackSegment {
    pub points: Vec<Waypoint>,
}
