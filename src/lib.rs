//! Convert ZweiteGPS JSON track logs into GPX 1.1 documents.
//!
//! The pipeline is: decode a JSON array of [`point::Point`] records, resolve
//! the output path (auto-naming from the track start time when no explicit
//! output is given), map the points onto a [`gpx::GpxDocument`], and
//! serialize it as indented XML. GPX content timestamps are always UTC; a
//! timezone offset only ever shifts the auto-generated filename.

pub mod convert;
pub mod error;
pub mod gpx;
pub mod gpxxml;
pub mod outpath;
pub mod point;
pub mod reader;
pub mod tzoffset;

pub use convert::{ConvertConfig, GpxConverter, DEFAULT_TRACK_NAME};
pub use error::ZwegError;
pub use gpxxml::GpxWriter;
pub use point::Point;
