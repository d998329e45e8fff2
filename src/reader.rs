use std::fs;
use std::path::Path;

use crate::error::ZwegError;
use crate::point::Point;

/// Decode a ZweiteGPS JSON array of points.
///
/// An empty array is never valid input; without a first point there is no
/// start time to anchor metadata or filename generation.
pub fn parse_points(data: &[u8]) -> Result<Vec<Point>, ZwegError> {
    let points: Vec<Point> = serde_json::from_slice(data)?;
    if points.is_empty() {
        return Err(ZwegError::EmptyInput);
    }
    Ok(points)
}

/// Read and decode a ZweiteGPS JSON file.
pub fn read_points(path: &Path) -> Result<Vec<Point>, ZwegError> {
    let data = fs::read(path).map_err(|source| ZwegError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_points(&data)
}
