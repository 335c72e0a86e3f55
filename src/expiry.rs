//! Turns the caller's `expirationTime` into a relative ttl in seconds.
//!
//! Accepted forms, tried in order: an ISO-8601 instant, then an integer
//! number of hours. The first form that parses decides the outcome.

use chrono::{DateTime, Utc};

use crate::error::ShortenError;

pub const DEFAULT_TTL_SECS: i64 = 24 * 3600;

/// Outcome of a single parser attempt.
#[derive(Debug, PartialEq, Eq)]
enum Attempt {
    Ttl(i64),
    /// Parsed, but the resulting ttl is not strictly positive.
    NotInFuture,
    /// Input is not in this parser's format; try the next one.
    Next,
}

type Parser = fn(&str, DateTime<Utc>) -> Attempt;

const PARSERS: &[Parser] = &[iso_instant, whole_hours];

// seconds are optional in ISO-8601 instants, e.g. 2099-01-01T00:00Z
const MINUTE_PRECISION: &str = "%Y-%m-%dT%H:%M%#z";

fn iso_instant(raw: &str, now: DateTime<Utc>) -> Attempt {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, MINUTE_PRECISION));
    let Ok(at) = parsed else {
        return Attempt::Next;
    };
    // num_seconds truncates toward zero
    let secs = (at.with_timezone(&Utc) - now).num_seconds();
    if secs <= 0 {
        Attempt::NotInFuture
    } else {
        Attempt::Ttl(secs)
    }
}

fn whole_hours(raw: &str, _now: DateTime<Utc>) -> Attempt {
    let Ok(hours) = raw.parse::<i64>() else {
        return Attempt::Next;
    };
    match hours.checked_mul(3600) {
        Some(secs) if secs > 0 => Attempt::Ttl(secs),
        Some(_) => Attempt::NotInFuture,
        None => Attempt::Next,
    }
}

/// Resolve the ttl for an optional raw value. Missing or blank input gets
/// [`DEFAULT_TTL_SECS`].
pub fn parse_expiration(raw: Option<&str>, now: DateTime<Utc>) -> Result<i64, ShortenError> {
    let raw = match raw {
        Some(r) if !r.trim().is_empty() => r,
        _ => return Ok(DEFAULT_TTL_SECS),
    };

    for parse in PARSERS {
        match parse(raw, now) {
            Attempt::Ttl(secs) => return Ok(secs),
            Attempt::NotInFuture => return Err(ShortenError::ExpirationInPast),
            Attempt::Next => continue,
        }
    }
    Err(ShortenError::InvalidExpirationFormat)
}
