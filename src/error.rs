use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by any stage of a conversion run.
///
/// Every variant aborts the run; nothing is retried. Messages carry the
/// path, field name, or offending value so they are actionable on their own.
#[derive(Error, Debug)]
pub enum ZwegError {
    #[error("failed to read input file {path:?}: {source}")]
    InputRead { path: PathBuf, source: io::Error },

    #[error("failed to parse JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no data points found in input")]
    EmptyInput,

    #[error("no data points provided")]
    NoData,

    #[error("failed to parse {field} {value:?}: {source}")]
    FieldParse {
        field: &'static str,
        value: String,
        source: ParseFloatError,
    },

    #[error("time component out of range: {0}")]
    TimeComponent(#[from] time::error::ComponentRange),

    #[error("failed to format timestamp: {0}")]
    TimeFormat(#[from] time::error::Format),

    #[error("output path is empty")]
    PathEmpty,

    #[error("path {0:?} contains invalid relative path components")]
    PathTraversal(PathBuf),

    #[error("failed to resolve absolute path for {path:?}: {source}")]
    PathResolve { path: PathBuf, source: io::Error },

    #[error("failed to create output directory {path:?}: {source}")]
    DirectoryCreate { path: PathBuf, source: io::Error },

    #[error("failed to write GPX file {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to write GPX: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("invalid timezone offset {text:?}: {reason} (expected ±HH:MM or ±HHMM)")]
    TimezoneFormat { text: String, reason: &'static str },

    #[error("timezone offset {text:?} out of valid range: {reason}")]
    TimezoneRange { text: String, reason: &'static str },
}
