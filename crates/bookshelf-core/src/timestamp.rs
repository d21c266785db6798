//! ISO 8601 timestamps with millisecond precision.
//!
//! Books carry `insertedAt`/`updatedAt` as UTC instants rendered like
//! `2024-05-01T12:34:56.789Z`. Use with `#[serde(with = "crate::timestamp")]`.

use chrono::{DateTime, SecondsFormat, SubsecRound as _, Utc};
use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

/// The current instant, truncated to the precision we serialise.
pub fn now() -> DateTime<Utc> { Utc::now().trunc_subsecs(3) }

pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
  S: Serializer,
{
  serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
  D: Deserializer<'de>,
{
  let raw = String::deserialize(deserializer)?;
  DateTime::parse_from_rfc3339(&raw)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(D::Error::custom)
}
