//! Wire-format helpers shared by the domain types.
//!
//! CloudStack is loose about JSON types: ids arrive as numbers on older
//! releases and strings on newer ones, resource limits use the literal
//! `"Unlimited"`, CIDR lists are comma-joined strings and timestamps carry a
//! `+hhmm` offset that RFC 3339 parsers reject.

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use crate::error::CoreError;

/// Timestamp layout used by the API, e.g. `2011-11-26T23:28:36+0200`.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl StringOrNumber {
    fn into_string(self) -> String {
        match self {
            Self::Str(s) => s,
            Self::Int(n) => n.to_string(),
            Self::UInt(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrList {
    Joined(String),
    List(Vec<String>),
}

/// Parses an API timestamp, falling back to RFC 3339.
///
/// # Errors
/// Returns [`CoreError::InvalidValue`] if neither layout matches.
pub fn parse_date(raw: &str) -> Result<DateTime<Utc>, CoreError> {
    DateTime::parse_from_str(raw, DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| CoreError::InvalidValue {
            field: "date".to_owned(),
            reason: format!("{raw}: {e}"),
        })
}

/// Decodes an id that may be a JSON string or number.
pub(crate) fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    StringOrNumber::deserialize(deserializer).map(StringOrNumber::into_string)
}

/// Optional variant of [`id`]; `null` and empty strings become `None`.
pub(crate) fn opt_id<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?
        .map(StringOrNumber::into_string)
        .filter(|s| !s.is_empty()))
}

/// Decodes an optional integer that may be sent as a number or a numeric string.
pub(crate) fn opt_int<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let Some(raw) = Option::<StringOrNumber>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let n: i64 = match raw {
        StringOrNumber::Str(s) if s.trim().is_empty() => return Ok(None),
        StringOrNumber::Str(s) => s
            .trim()
            .parse()
            .map_err(|e| D::Error::custom(format!("invalid integer '{s}': {e}")))?,
        StringOrNumber::Int(n) => n,
        StringOrNumber::UInt(n) => {
            i64::try_from(n).map_err(|_| D::Error::custom(format!("integer {n} out of range")))?
        }
        StringOrNumber::Float(n) => return Err(D::Error::custom(format!("fractional integer {n}"))),
    };
    T::try_from(n)
        .map(Some)
        .map_err(|_| D::Error::custom(format!("integer {n} out of range")))
}

/// Decodes an optional decimal that may be sent as a number or a numeric string.
pub(crate) fn opt_float<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => Ok(None),
        Some(StringOrNumber::Str(s)) if s.trim().is_empty() => Ok(None),
        Some(StringOrNumber::Str(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| D::Error::custom(format!("invalid decimal '{s}': {e}"))),
        #[allow(clippy::cast_precision_loss)]
        Some(StringOrNumber::Int(n)) => Ok(Some(n as f64)),
        #[allow(clippy::cast_precision_loss)]
        Some(StringOrNumber::UInt(n)) => Ok(Some(n as f64)),
        Some(StringOrNumber::Float(n)) => Ok(Some(n)),
    }
}

/// Decodes an optional API timestamp.
pub(crate) fn opt_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.is_empty() => Ok(None),
        Some(raw) => parse_date(&raw).map(Some).map_err(D::Error::custom),
    }
}

/// Decodes a resource limit; `"Unlimited"` and absent values become `None`.
pub(crate) fn limit<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => Ok(None),
        Some(StringOrNumber::Str(s)) if s.eq_ignore_ascii_case("unlimited") => Ok(None),
        Some(StringOrNumber::Str(s)) => s
            .parse()
            .map(Some)
            .map_err(|e| D::Error::custom(format!("invalid limit '{s}': {e}"))),
        Some(StringOrNumber::Int(n)) => u64::try_from(n)
            .map(Some)
            .map_err(|_| D::Error::custom(format!("negative limit {n}"))),
        Some(StringOrNumber::UInt(n)) => Ok(Some(n)),
        Some(StringOrNumber::Float(n)) => Err(D::Error::custom(format!("fractional limit {n}"))),
    }
}

/// Decodes a comma-joined string (or a JSON array) into its trimmed parts.
pub(crate) fn csv<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let parts = match Option::<StringOrList>::deserialize(deserializer)? {
        None => return Ok(Vec::new()),
        Some(StringOrList::Joined(s)) => s.split(',').map(str::to_owned).collect::<Vec<_>>(),
        Some(StringOrList::List(v)) => v,
    };
    Ok(parts
        .into_iter()
        .map(|p| p.trim().to_owned())
        .filter(|p| !p.is_empty())
        .collect())
}

/// Declares an enum carried on the wire as a server-defined string code.
///
/// Every generated enum gains an `Unrecognized` variant so that codes added by
/// newer servers never fail decoding. `Display` renders the wire code, which
/// is what the request encoder sends.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A code this client does not know about.
            Unrecognized,
        }

        impl $name {
            /// The server-defined wire code.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Unrecognized => "UNRECOGNIZED",
                }
            }

            /// Decodes a wire code, ignoring ASCII case.
            #[must_use]
            pub fn from_wire(code: &str) -> Self {
                $( if code.eq_ignore_ascii_case($wire) { return Self::$variant; } )+
                Self::Unrecognized
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let code = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from_wire(&code))
            }
        }
    };
}

pub(crate) use wire_enum;

/// Decodes a numeric code that may be sent as a JSON number or a string.
pub(crate) fn code<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Str(s) => s
            .trim()
            .parse()
            .map_err(|e| D::Error::custom(format!("invalid numeric code '{s}': {e}"))),
        StringOrNumber::Int(n) => Ok(n),
        StringOrNumber::UInt(n) => {
            i64::try_from(n).map_err(|_| D::Error::custom(format!("code {n} out of range")))
        }
        StringOrNumber::Float(n) => Err(D::Error::custom(format!("fractional code {n}"))),
    }
}

/// Declares an enum carried on the wire as a numeric code.
///
/// Like [`wire_enum!`], unknown codes decode to `Unrecognized`. The encoder
/// sends the decimal code.
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $code:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A code this client does not know about.
            Unrecognized,
        }

        impl $name {
            /// The numeric wire code, or `None` for `Unrecognized`.
            #[must_use]
            pub fn code(self) -> Option<i64> {
                match self {
                    $( Self::$variant => Some($code), )+
                    Self::Unrecognized => None,
                }
            }

            /// Decodes a numeric wire code.
            #[must_use]
            pub fn from_code(code: i64) -> Self {
                match code {
                    $( $code => Self::$variant, )+
                    _ => Self::Unrecognized,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self.code() {
                    Some(code) => write!(f, "{code}"),
                    None => f.write_str("UNRECOGNIZED"),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                match self.code() {
                    Some(code) => serializer.serialize_i64(code),
                    None => serializer.serialize_none(),
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                $crate::wire::code(deserializer).map(Self::from_code)
            }
        }
    };
}

pub(crate) use code_enum;

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "id")]
        id: String,
        #[serde(default, deserialize_with = "limit")]
        limit: Option<u64>,
        #[serde(default, deserialize_with = "csv")]
        cidrs: Vec<String>,
        #[serde(default, deserialize_with = "opt_date")]
        created: Option<DateTime<Utc>>,
    }

    fn sample(json: &str) -> Sample {
        match serde_json::from_str(json) {
            Ok(p) => p,
            Err(e) => panic!("sample must decode {json}: {e}"),
        }
    }

    #[test]
    fn numeric_id_is_rendered_as_decimal_string() {
        assert_eq!(sample(r#"{"id": 2017}"#).id, "2017");
        assert_eq!(sample(r#"{"id": "2017"}"#).id, "2017");
    }

    #[test]
    fn unlimited_limit_decodes_to_none() {
        assert_eq!(sample(r#"{"id": 1, "limit": "Unlimited"}"#).limit, None);
        assert_eq!(sample(r#"{"id": 1, "limit": "20"}"#).limit, Some(20));
        assert_eq!(sample(r#"{"id": 1, "limit": 20}"#).limit, Some(20));
        assert_eq!(sample(r#"{"id": 1}"#).limit, None);
    }

    #[test]
    fn negative_limit_is_rejected() {
        let result: Result<Sample, _> = serde_json::from_str(r#"{"id": 1, "limit": -3}"#);
        assert!(result.is_err(), "negative limits must not decode");
    }

    #[test]
    fn csv_splits_and_trims() {
        let p = sample(r#"{"id": 1, "cidrs": "0.0.0.0/1, 128.0.0.0/1"}"#);
        assert_eq!(p.cidrs, vec!["0.0.0.0/1".to_owned(), "128.0.0.0/1".to_owned()]);
        let p = sample(r#"{"id": 1, "cidrs": ""}"#);
        assert!(p.cidrs.is_empty(), "empty cidr list must decode to no entries");
    }

    #[test]
    fn offset_dates_normalise_to_utc() {
        let p = sample(r#"{"id": 1, "created": "2011-11-26T23:28:36+0200"}"#);
        let created = match p.created {
            Some(d) => d,
            None => panic!("created must be present"),
        };
        assert_eq!(created.year(), 2011);
        assert_eq!(created.hour(), 21, "+0200 must shift to 21:28 UTC");
        assert_eq!(created.minute(), 28);
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(parse_date("yesterday").is_err());
        assert!(parse_date("2011-11-26T23:28:36Z").is_ok(), "RFC 3339 fallback must work");
    }
}
