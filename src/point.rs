use serde::Deserialize;
use time::{OffsetDateTime, UtcOffset};

use crate::error::ZwegError;

/// One GPS sample from a ZweiteGPS JSON log.
///
/// Field names mirror the wire format. Altitude, speed, and distance arrive
/// as strings; an empty string means "no value" and parses to zero. A point
/// is immutable after decoding, and every derived value is computed on
/// demand from the raw fields.
#[derive(Debug, Clone, Deserialize)]
pub struct Point {
    /// Unix timestamp, seconds. May be negative for pre-1970 data.
    pub tm: i64,
    /// Longitude, decimal degrees.
    pub lo: f64,
    /// Latitude, decimal degrees.
    pub la: f64,
    /// True heading, degrees.
    pub th: i32,
    /// Speed, parseable float or empty.
    pub sp: String,
    /// Course, degrees; -1 means unknown.
    pub co: i32,
    /// Altitude in meters, parseable float or empty.
    pub al: String,
    /// Heading, degrees.
    pub he: i32,
    /// Distance in meters, parseable float or empty.
    pub ds: String,
    /// Milliseconds part of the timestamp.
    #[serde(default)]
    pub ms: Option<i64>,
    /// Device/owner description.
    #[serde(default)]
    pub ow: Option<String>,
}

impl Point {
    /// The instant of this sample, normalized to UTC.
    ///
    /// All GPX content timestamps come from here. The output format mandates
    /// UTC, so this is never affected by a timezone offset option.
    pub fn timestamp(&self) -> Result<OffsetDateTime, ZwegError> {
        Ok(OffsetDateTime::from_unix_timestamp(self.tm)?)
    }

    /// The same instant represented in a fixed offset of `offset_seconds`
    /// from UTC. An offset of zero behaves identically to [`Self::timestamp`].
    ///
    /// Used only for filename generation, never for GPX content.
    pub fn timestamp_with_offset(&self, offset_seconds: i32) -> Result<OffsetDateTime, ZwegError> {
        let offset = UtcOffset::from_whole_seconds(offset_seconds)?;
        Ok(self.timestamp()?.to_offset(offset))
    }

    /// Altitude in meters parsed from the raw string field.
    pub fn altitude(&self) -> Result<f64, ZwegError> {
        parse_measurement("altitude", &self.al)
    }

    /// Speed parsed from the raw string field.
    pub fn speed(&self) -> Result<f64, ZwegError> {
        parse_measurement("speed", &self.sp)
    }

    /// Distance in meters parsed from the raw string field.
    pub fn distance(&self) -> Result<f64, ZwegError> {
        parse_measurement("distance", &self.ds)
    }
}

fn parse_measurement(field: &'static str, raw: &str) -> Result<f64, ZwegError> {
    if raw.is_empty() {
        return Ok(0.0);
    }
    raw.parse().map_err(|source| ZwegError::FieldParse {
        field,
        value: raw.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn make_point(tm: i64) -> Point {
        Point {
            tm,
            lo: 139.7454,
            la: 35.6812,
            th: 0,
            sp: String::new(),
            co: 0,
            al: String::new(),
            he: 0,
            ds: String::new(),
            ms: None,
            ow: None,
        }
    }

    #[test]
    fn test_timestamp_epoch() {
        let p = make_point(0);
        assert_eq!(p.timestamp().unwrap(), datetime!(1970-01-01 00:00:00 UTC));
    }

    #[test]
    fn test_timestamp_specific() {
        let p = make_point(1609459200);
        assert_eq!(p.timestamp().unwrap(), datetime!(2021-01-01 00:00:00 UTC));
    }

    #[test]
    fn test_timestamp_negative() {
        let p = make_point(-1);
        let ts = p.timestamp().unwrap();
        assert_eq!(ts.unix_timestamp(), -1);
        assert_eq!(ts, datetime!(1969-12-31 23:59:59 UTC));
    }

    #[test]
    fn test_timestamp_with_offset_zero_matches_utc() {
        let p = make_point(1609459200);
        assert_eq!(
            p.timestamp_with_offset(0).unwrap(),
            p.timestamp().unwrap()
        );
        assert_eq!(p.timestamp_with_offset(0).unwrap().offset(), UtcOffset::UTC);
    }

    #[test]
    fn test_timestamp_with_offset_shifts_wall_clock_only() {
        let p = make_point(1609459200);
        let shifted = p.timestamp_with_offset(32400).unwrap();

        // Same instant, different representation.
        assert_eq!(shifted.unix_timestamp(), 1609459200);
        assert_eq!(shifted.offset(), UtcOffset::from_whole_seconds(32400).unwrap());
        assert_eq!(shifted.hour(), 9);
    }

    #[test]
    fn test_timestamp_with_negative_offset_crosses_date() {
        let p = make_point(1609459200);
        let shifted = p.timestamp_with_offset(-18000).unwrap();
        assert_eq!(shifted.date(), datetime!(2020-12-31 00:00:00 UTC).date());
        assert_eq!(shifted.hour(), 19);
    }

    #[test]
    fn test_altitude() {
        let cases = [
            ("123.45", Some(123.45)),
            ("0", Some(0.0)),
            ("-10.5", Some(-10.5)),
            ("", Some(0.0)),
            ("invalid", None),
            ("12.34abc", None),
        ];

        for (raw, want) in cases {
            let mut p = make_point(0);
            p.al = raw.to_string();
            match want {
                Some(value) => assert_eq!(p.altitude().unwrap(), value, "altitude {raw:?}"),
                None => {
                    let err = p.altitude().unwrap_err();
                    match err {
                        ZwegError::FieldParse { field, value, .. } => {
                            assert_eq!(field, "altitude");
                            assert_eq!(value, raw);
                        }
                        other => panic!("unexpected error: {other}"),
                    }
                }
            }
        }
    }

    #[test]
    fn test_speed() {
        let cases = [
            ("25.5", Some(25.5)),
            ("0", Some(0.0)),
            ("", Some(0.0)),
            ("fast", None),
        ];

        for (raw, want) in cases {
            let mut p = make_point(0);
            p.sp = raw.to_string();
            match want {
                Some(value) => assert_eq!(p.speed().unwrap(), value, "speed {raw:?}"),
                None => assert!(p.speed().unwrap_err().to_string().contains("speed")),
            }
        }
    }

    #[test]
    fn test_distance() {
        let cases = [
            ("1500.75", Some(1500.75)),
            ("0", Some(0.0)),
            ("", Some(0.0)),
            ("far", None),
        ];

        for (raw, want) in cases {
            let mut p = make_point(0);
            p.ds = raw.to_string();
            match want {
                Some(value) => assert_eq!(p.distance().unwrap(), value, "distance {raw:?}"),
                None => assert!(p.distance().unwrap_err().to_string().contains("distance")),
            }
        }
    }
}
