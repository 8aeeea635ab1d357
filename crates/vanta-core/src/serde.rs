// This module shadows the `serde` crate; `::serde` reaches the external one.
use ::serde::Serializer;
use chrono::{DateTime, SecondsFormat, Utc};

/// Serialize a `DateTime<Utc>` as RFC 3339 with exactly three fractional
/// digits. The frontend's date parsing expects millisecond precision, no
/// more and no less.
pub fn to_rfc3339_ms<S>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}
