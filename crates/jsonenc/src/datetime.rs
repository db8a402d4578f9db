//! Encoders for `chrono` date and time types.

use std::fmt::Display;

use ::chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone};
use serde_json::Value;

use crate::Encoder;

/// RFC 3339 string, seconds precision unless the value carries a fraction.
pub fn datetime<Tz>() -> Encoder<DateTime<Tz>>
where
    Tz: TimeZone + 'static,
    Tz::Offset: Display,
{
    Encoder::new(|dt: &DateTime<Tz>| Value::String(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)))
}

/// `YYYY-MM-DD` string.
pub fn naive_date() -> Encoder<NaiveDate> {
    Encoder::new(|d: &NaiveDate| Value::String(d.format("%Y-%m-%d").to_string()))
}

/// Milliseconds since the Unix epoch as a JSON number.
pub fn timestamp_millis<Tz>() -> Encoder<DateTime<Tz>>
where
    Tz: TimeZone + 'static,
{
    Encoder::new(|dt: &DateTime<Tz>| Value::from(dt.timestamp_millis()))
}
