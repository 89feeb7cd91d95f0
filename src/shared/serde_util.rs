//! Custom serde helpers for the trade API's wire formats.

/// Serializes a `bool` as the literal strings `"true"`/`"false"`.
///
/// The API expects string booleans in query parameters (`IncludeActive=true`)
/// while JSON bodies carry native booleans; query-channel request types opt
/// into this module per field. Deserialization accepts both forms so the same
/// structs round-trip.
pub mod bool_str {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(if *value { "true" } else { "false" })
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum BoolOrStr {
            Bool(bool),
            Str(String),
        }

        match BoolOrStr::deserialize(deserializer)? {
            BoolOrStr::Bool(b) => Ok(b),
            BoolOrStr::Str(s) => match s.as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                other => Err(serde::de::Error::custom(format!(
                    "invalid boolean string: {other}"
                ))),
            },
        }
    }
}

/// `DateTime<Utc>` as `yyyy-MM-ddTHH:mm:ssZ`.
///
/// The API documents second precision for order timestamps; chrono's default
/// RFC 3339 output carries fractional seconds, so the format is pinned here.
pub mod utc_second {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        // Responses occasionally carry fractional seconds; fall back to
        // RFC 3339 parsing before giving up.
        if let Ok(naive) = NaiveDateTime::parse_from_str(&s, FORMAT) {
            return Ok(naive.and_utc());
        }
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

/// Optional variant of [`utc_second`] for fields the API may omit or null.
pub mod utc_second_opt {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => super::utc_second::serialize(dt, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wrapper(#[serde(with = "super::utc_second")] DateTime<Utc>);

        Ok(Option::<Wrapper>::deserialize(deserializer)?.map(|w| w.0))
    }
}
