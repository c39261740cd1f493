use chrono::{DateTime, Utc};

use crate::errors::Result;

/// Parses an RFC 3339 timestamp and normalizes it to UTC.
///
/// Offsets other than `Z` are accepted and converted, so
/// `2021-08-01T02:00:00+02:00` and `2021-08-01T00:00:00Z` compare equal.
pub fn parse_rfc3339(value: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(value.trim())?;
    Ok(parsed.with_timezone(&Utc))
}
