use crate::error::ZwegError;

/// Minimum representable offset, -12:00 in seconds.
pub const MIN_OFFSET_SECONDS: i32 = -12 * 3600;
/// Maximum representable offset, +14:00 in seconds.
pub const MAX_OFFSET_SECONDS: i32 = 14 * 3600;

/// Parse a `±HH:MM` or `±HHMM` timezone offset into seconds.
///
/// The sign is mandatory. Hours run 00-14 and minutes 00-59, with +14:00 as
/// the largest representable offset and the signed total bounded to
/// -12:00..=+14:00. The result only ever affects the auto-generated
/// filename; GPX content stays UTC.
pub fn parse_timezone_offset(text: &str) -> Result<i32, ZwegError> {
    if text.is_empty() {
        return Err(format_error(text, "offset is empty"));
    }

    let (sign, rest) = match text.as_bytes()[0] {
        b'+' => (1, &text[1..]),
        b'-' => (-1, &text[1..]),
        _ => return Err(format_error(text, "offset must start with + or -")),
    };

    let (hours_str, minutes_str) = match rest.split_once(':') {
        Some((hours, minutes)) => {
            if minutes.contains(':') {
                return Err(format_error(text, "expected exactly one colon"));
            }
            if hours.len() != 2 || minutes.len() != 2 {
                return Err(format_error(text, "hours and minutes must each be two digits"));
            }
            (hours, minutes)
        }
        None => {
            // Digit check first: rest may hold multibyte characters, which
            // would make fixed byte indices fall inside a char boundary.
            if rest.len() != 4 || !rest.chars().all(|c| c.is_ascii_digit()) {
                return Err(format_error(text, "expected four digits without a colon"));
            }
            (&rest[..2], &rest[2..])
        }
    };

    let hours: i32 = hours_str
        .parse()
        .map_err(|_| format_error(text, "hours must be numeric (00-14)"))?;
    let minutes: i32 = minutes_str
        .parse()
        .map_err(|_| format_error(text, "minutes must be numeric (00-59)"))?;

    if !(0..=14).contains(&hours) {
        return Err(range_error(text, "hours must be between 00 and 14"));
    }
    if !(0..=59).contains(&minutes) {
        return Err(range_error(text, "minutes must be between 00 and 59"));
    }
    if hours == 14 && minutes > 0 {
        return Err(range_error(text, "maximum offset is +14:00"));
    }

    let total = sign * (hours * 3600 + minutes * 60);
    if !(MIN_OFFSET_SECONDS..=MAX_OFFSET_SECONDS).contains(&total) {
        return Err(range_error(text, "offset must be between -12:00 and +14:00"));
    }

    Ok(total)
}

fn format_error(text: &str, reason: &'static str) -> ZwegError {
    ZwegError::TimezoneFormat {
        text: text.to_string(),
        reason,
    }
}

fn range_error(text: &str, reason: &'static str) -> ZwegError {
    ZwegError::TimezoneRange {
        text: text.to_string(),
        reason,
    }
}
