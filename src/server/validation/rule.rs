use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use serde_json::Value;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$").expect("email pattern is a valid regex")
});

static INTEGER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?\d+$").expect("integer pattern is a valid regex")
});

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[0-9\s\-().]{7,20}$").expect("phone pattern is a valid regex")
});

/// Accepted `datetime` layouts, space or `T` separated.
pub const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Accepted `time` layouts.
pub const TIME_FORMATS: &[&str] = &["%H:%M", "%H:%M:%S"];

/// A single typed constraint on a request field.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Field must be present and non-empty.
    Required,
    /// Field must be a JSON string.
    String,
    Email,
    /// Minimum length in characters.
    Min(usize),
    /// Maximum length in characters.
    Max(usize),
    /// Field must equal one of the listed values.
    In(&'static [&'static str]),
    /// JSON integer or a string of an optional sign followed by digits, within `i32` range.
    Integer,
    /// Any JSON number or a string that parses as a decimal number.
    Numeric,
    /// `YYYY-MM-DD`
    Date,
    /// `YYYY-MM-DD HH:MM:SS`
    DateTime,
    /// `HH:MM`
    Time,
    Phone,
    Array,
    /// JSON object/array, or a string holding valid JSON.
    Json,
    /// Absolute `http` or `https` URL.
    Url,
    Boolean,
}

impl Rule {
    /// Checks `value` against this rule, returning the message to report on failure.
    ///
    /// `value` is `None` when the key is missing. Format rules treat `null` and `""` as
    /// nothing to check so that a missing required field only reports the required message.
    pub fn check(&self, field: &str, value: Option<&Value>) -> Option<String> {
        let value = value.unwrap_or(&Value::Null);

        let passes = match self {
            Self::Required => !is_empty(value),
            Self::String => value.is_string(),
            Self::Email => value.as_str().is_some_and(|s| EMAIL.is_match(s)),
            Self::Min(min) => length(value) >= *min,
            Self::Max(max) => length(value) <= *max,
            Self::In(allowed) => scalar_text(value).is_some_and(|s| allowed.contains(&s.as_str())),
            Self::Array => value.is_array(),
            _ if is_blank(value) => true,
            Self::Integer if is_integer(value) => {
                if as_i32(value).is_none() {
                    return Some(format!(
                        "The {field} field must be between {} and {}.",
                        i32::MIN,
                        i32::MAX
                    ));
                }

                true
            }
            Self::Integer => false,
            Self::Numeric => is_numeric(value),
            Self::Date => value.as_str().and_then(parse_date).is_some(),
            Self::DateTime => value.as_str().and_then(parse_datetime).is_some(),
            Self::Time => value.as_str().and_then(parse_time).is_some(),
            Self::Phone => value.as_str().is_some_and(|s| PHONE.is_match(s)),
            Self::Json => match value {
                Value::Object(_) | Value::Array(_) => true,
                Value::String(s) => serde_json::from_str::<Value>(s).is_ok(),
                _ => false,
            },
            Self::Url => value.as_str().is_some_and(is_url),
            Self::Boolean => parse_bool(value).is_some(),
        };

        if passes {
            None
        } else {
            Some(self.message(field))
        }
    }

    fn message(&self, field: &str) -> String {
        match self {
            Self::Required => format!("The {field} field is required."),
            Self::String => format!("The {field} field must be a string."),
            Self::Email => format!("The {field} field must be a valid email address."),
            Self::Min(n) => format!("The {field} field must be at least {n} characters."),
            Self::Max(n) => format!("The {field} field may not be greater than {n} characters."),
            Self::In(allowed) => format!(
                "The selected {field} is invalid. Allowed values are: {}.",
                allowed.join(", ")
            ),
            Self::Integer => format!("The {field} field must be an integer."),
            Self::Numeric => format!("The {field} field must be a number."),
            Self::Date => format!("The {field} field must be a valid date in YYYY-MM-DD format."),
            Self::DateTime => format!(
                "The {field} field must be a valid datetime in YYYY-MM-DD HH:MM:SS format."
            ),
            Self::Time => format!("The {field} field must be a valid time in HH:MM format."),
            Self::Phone => format!("The {field} field must be a valid phone number."),
            Self::Array => format!("The {field} field must be an array."),
            Self::Json => format!("The {field} field must be valid JSON."),
            Self::Url => format!("The {field} field must be a valid URL."),
            Self::Boolean => format!("The {field} field must be true or false."),
        }
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Character length of a scalar, `0` for null.
fn length(value: &Value) -> usize {
    scalar_text(value).map_or(0, |s| s.chars().count())
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.is_i64() || n.is_u64(),
        Value::String(s) => INTEGER.is_match(s.trim()),
        _ => false,
    }
}

fn as_i32(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn is_numeric(value: &Value) -> bool {
    match value {
        Value::Number(_) => true,
        Value::String(s) => s.trim().parse::<f64>().is_ok_and(f64::is_finite),
        _ => false,
    }
}

fn is_url(value: &str) -> bool {
    url::Url::parse(value)
        .is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.host().is_some())
}

pub(super) fn parse_date(value: &str) -> Option<NaiveDate> {
    if value.len() != 10 {
        return None;
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

pub(super) fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

pub(super) fn parse_time(value: &str) -> Option<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(value, format).ok())
}

pub(super) fn parse_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(s) => match s.as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}
