use std::env;
use std::path::{Component, Path, PathBuf};

use time::format_description::FormatItem;
use time::macros::format_description;

use crate::error::ZwegError;
use crate::point::Point;

/// Wall-clock stamp used for auto-generated filenames.
const FILENAME_FORMAT: &[FormatItem<'static>] =
    format_description!("[year][month][day]-[hour][minute][second]");

/// Validate and sanitize an output path.
///
/// The path is cleaned lexically: `.` components and redundant separators
/// are dropped, but `..` components are NOT resolved against the rest of the
/// path. Any `..` remaining after cleaning rejects the whole path, including
/// forms like `a/../b` that a full lexical resolution could reduce. This is
/// a documented, tested contract; keep it this strict.
///
/// On success, returns the absolute form of the cleaned path.
pub fn validate_output_path(path: &Path) -> Result<PathBuf, ZwegError> {
    if path.as_os_str().is_empty() {
        return Err(ZwegError::PathEmpty);
    }

    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                return Err(ZwegError::PathTraversal(path.to_path_buf()));
            }
            other => cleaned.push(other),
        }
    }

    if cleaned.as_os_str().is_empty() {
        // A bare "." cleans down to the current directory.
        return current_dir(path);
    }

    if cleaned.is_absolute() {
        return Ok(cleaned);
    }
    Ok(current_dir(path)?.join(cleaned))
}

fn current_dir(original: &Path) -> Result<PathBuf, ZwegError> {
    env::current_dir().map_err(|source| ZwegError::PathResolve {
        path: original.to_path_buf(),
        source,
    })
}

/// Decide the final output file path.
///
/// An explicit output file wins outright; the output directory is ignored in
/// that case and must not be created. Otherwise the filename is generated
/// from the first point's timestamp shifted by `timezone_offset` seconds and
/// placed in `output_dir` (validated) or next to the input file.
pub fn resolve_output_path(
    input_file: &Path,
    output_file: Option<&Path>,
    output_dir: Option<&Path>,
    points: &[Point],
    timezone_offset: i32,
) -> Result<PathBuf, ZwegError> {
    if let Some(output_file) = output_file.filter(|p| !p.as_os_str().is_empty()) {
        return validate_output_path(output_file);
    }
    generate_output_filename(input_file, output_dir, points, timezone_offset)
}

/// Auto-generate a `YYYYMMDD-HHMMSS.gpx` filename from the track start time.
fn generate_output_filename(
    input_file: &Path,
    output_dir: Option<&Path>,
    points: &[Point],
    timezone_offset: i32,
) -> Result<PathBuf, ZwegError> {
    let Some(first) = points.first() else {
        // Should not occur; the reader rejects empty input.
        let mut fallback = input_file.as_os_str().to_os_string();
        fallback.push(".gpx");
        return Ok(PathBuf::from(fallback));
    };

    let stamp = first.timestamp_with_offset(timezone_offset)?;
    let base_name = format!("{}.gpx", stamp.format(&FILENAME_FORMAT)?);

    let dir = match output_dir.filter(|p| !p.as_os_str().is_empty()) {
        Some(dir) => validate_output_path(dir)?,
        None => input_parent(input_file),
    };

    Ok(dir.join(base_name))
}

fn input_parent(input_file: &Path) -> PathBuf {
    match input_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
