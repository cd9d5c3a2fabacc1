//! Attribute values and type coercion.
//!
//! Callers hand [`RawValue`]s to [`Record::set`](crate::rest::Record::set);
//! the record coerces them into [`AttributeValue`]s according to the
//! attribute's declared [`AttributeType`]. Values are coerced once, on the way
//! in, and rendered back to JSON with [`AttributeValue::to_wire`].

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde_json::Value;

use crate::rest::{AttributeSpec, AttributeType, ResourceError};

/// Boolean spellings accepted on assignment.
const TRUE_WORDS: &[&str] = &["true", "1", "yes"];
const FALSE_WORDS: &[&str] = &["false", "0", "no"];

/// Naive layouts read as UTC.
const NAIVE_LAYOUTS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// A coerced attribute value.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    /// A boolean attribute value.
    Bool(bool),
    /// A timestamp attribute value, always in UTC.
    Timestamp(DateTime<Utc>),
    /// An opaque attribute value, stored exactly as given.
    Opaque(Value),
    /// An explicit null, meaning "clear this value".
    Null,
}

impl AttributeValue {
    /// Coerces a raw value for the given attribute.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Coercion`] if the value cannot represent the
    /// attribute's declared type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use twitter_ads::rest::{AttributeSpec, AttributeType, AttributeValue, RawValue};
    ///
    /// let spec = AttributeSpec { name: "paused", kind: AttributeType::Boolean, read_only: false };
    /// let value = AttributeValue::coerce(&spec, RawValue::from("TRUE")).unwrap();
    /// assert_eq!(value, AttributeValue::Bool(true));
    /// ```
    pub fn coerce(spec: &AttributeSpec, raw: RawValue) -> Result<Self, ResourceError> {
        if raw.is_null() {
            return Ok(Self::Null);
        }

        let coerced = match spec.kind {
            AttributeType::Boolean => coerce_bool(&raw).map(Self::Bool),
            AttributeType::Timestamp => coerce_timestamp(&raw).map(Self::Timestamp),
            AttributeType::Opaque => {
                return Ok(match raw {
                    RawValue::Json(value) => Self::Opaque(value),
                    RawValue::Instant(instant) => {
                        Self::Opaque(Value::String(render_timestamp(&instant)))
                    }
                });
            }
        };

        coerced.ok_or_else(|| ResourceError::Coercion {
            attribute: spec.name,
            value: raw.to_string(),
            expected: spec.kind.as_str(),
        })
    }

    /// Renders the value for a request payload.
    ///
    /// Timestamps become RFC 3339 strings in UTC with a `Z` suffix.
    #[must_use]
    pub fn to_wire(&self) -> Value {
        match self {
            Self::Bool(b) => Value::Bool(*b),
            Self::Timestamp(instant) => Value::String(render_timestamp(instant)),
            Self::Opaque(value) => value.clone(),
            Self::Null => Value::Null,
        }
    }

    /// Returns the boolean, if this is a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the instant, if this is a timestamp value.
    #[must_use]
    pub const fn as_timestamp(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::Timestamp(instant) => Some(instant),
            _ => None,
        }
    }

    /// Returns the JSON value, if this is an opaque value.
    #[must_use]
    pub const fn as_opaque(&self) -> Option<&Value> {
        match self {
            Self::Opaque(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the string, if this is an opaque string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.as_opaque().and_then(Value::as_str)
    }

    /// Returns `true` for an explicit null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// An uncoerced input value.
///
/// Most callers never name this type: anything with a `From` impl below can
/// be passed straight to [`Record::set`](crate::rest::Record::set).
#[derive(Clone, Debug, PartialEq)]
pub enum RawValue {
    /// A JSON value (strings, numbers, booleans, arrays, objects, null).
    Json(Value),
    /// A native instant.
    Instant(DateTime<Utc>),
}

impl RawValue {
    /// Returns `true` for JSON null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Json(Value::Null))
    }
}

impl std::fmt::Display for RawValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{value}"),
            Self::Instant(instant) => write!(f, "{}", render_timestamp(instant)),
        }
    }
}

impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl From<DateTime<Utc>> for RawValue {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::Instant(instant)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::Json(Value::String(s.to_string()))
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        Self::Json(Value::String(s))
    }
}

macro_rules! raw_from_json {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RawValue {
                fn from(v: $ty) -> Self {
                    Self::Json(Value::from(v))
                }
            }
        )*
    };
}

raw_from_json!(bool, i32, i64, u32, u64, f64);

fn coerce_bool(raw: &RawValue) -> Option<bool> {
    match raw {
        RawValue::Json(Value::Bool(b)) => Some(*b),
        RawValue::Json(Value::String(s)) => {
            let word = s.trim().to_ascii_lowercase();
            if TRUE_WORDS.contains(&word.as_str()) {
                Some(true)
            } else if FALSE_WORDS.contains(&word.as_str()) {
                Some(false)
            } else {
                None
            }
        }
        RawValue::Json(Value::Number(n)) => match n.as_i64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn coerce_timestamp(raw: &RawValue) -> Option<DateTime<Utc>> {
    match raw {
        RawValue::Instant(instant) => Some(*instant),
        RawValue::Json(Value::String(s)) => parse_timestamp(s),
        RawValue::Json(Value::Number(n)) => {
            if let Some(secs) = n.as_i64() {
                Utc.timestamp_opt(secs, 0).single()
            } else {
                epoch_from_f64(n.as_f64()?)
            }
        }
        RawValue::Json(_) => None,
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn epoch_from_f64(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() || secs.abs() > i64::MAX as f64 {
        return None;
    }
    let whole = secs.floor();
    let nanos = ((secs - whole) * 1_000_000_000.0).round().min(999_999_999.0) as u32;
    Utc.timestamp_opt(whole as i64, nanos).single()
}

/// Parses an ISO-8601 timestamp.
///
/// Accepts RFC 3339 (`Z` or numeric offset), offsets without a colon, and
/// naive date-times, which are read as UTC.
#[must_use]
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_LAYOUTS.iter().find_map(|layout| {
        NaiveDateTime::parse_from_str(s, layout)
            .ok()
            .map(|naive| Utc.from_utc_datetime(&naive))
    })
}

/// Renders an instant in the canonical wire format.
#[must_use]
pub fn render_timestamp(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
