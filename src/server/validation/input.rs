use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::{Map, Value};

use super::{
    rule::{parse_bool, parse_date, parse_datetime, parse_time},
    ValidationErrors,
};
use crate::server::error::Error;

/// JSON object body of a request.
///
/// Malformed JSON or a body that is not an object is rejected with a 400 envelope. An empty
/// body is read as an empty object so that endpoints with only optional fields accept it.
///
/// Accessors treat a missing key and an explicit `null` the same way, and return `None`
/// when the stored value cannot be read as the requested type. Run a
/// [`Schema`](super::Schema) first to report those cases to the client.
#[derive(Debug, Clone, Default)]
pub struct Input(pub Map<String, Value>);

impl<S> FromRequest<S> for Input
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| Error::BadRequest(format!("Failed to read request body: {}", e)))?;

        Input::from_slice(&bytes)
    }
}

impl From<Value> for Input {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }
}

impl Input {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            _ => Err(Error::BadRequest("Invalid JSON input".to_string())),
        }
    }

    /// Raw value for `key`, `None` when missing or `null`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|value| !value.is_null())
    }

    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Owned string for `key`, with empty strings read as absent.
    pub fn opt_string(&self, key: &str) -> Option<String> {
        self.str(key)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }

    /// Required string; reports the required message when missing.
    pub fn string(&self, key: &str) -> Result<String, ValidationErrors> {
        self.opt_string(key).ok_or_else(|| required(key))
    }

    pub fn integer(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Integer identifier that fits a database key.
    pub fn id(&self, key: &str) -> Option<i32> {
        self.integer(key).and_then(|value| i32::try_from(value).ok())
    }

    pub fn require_id(&self, key: &str) -> Result<i32, ValidationErrors> {
        self.id(key).ok_or_else(|| required(key))
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn boolean(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(parse_bool)
    }

    pub fn date(&self, key: &str) -> Option<NaiveDate> {
        self.str(key).and_then(parse_date)
    }

    pub fn require_date(&self, key: &str) -> Result<NaiveDate, ValidationErrors> {
        self.date(key).ok_or_else(|| required(key))
    }

    pub fn datetime(&self, key: &str) -> Option<NaiveDateTime> {
        self.str(key).and_then(parse_datetime)
    }

    pub fn time(&self, key: &str) -> Option<NaiveTime> {
        self.str(key).and_then(parse_time)
    }

    pub fn require_time(&self, key: &str) -> Result<NaiveTime, ValidationErrors> {
        self.time(key).ok_or_else(|| required(key))
    }

    /// Integer items of an array field, skipping entries that are not integers.
    pub fn id_list(&self, key: &str) -> Option<Vec<i32>> {
        let items = self.get(key)?.as_array()?;

        Some(
            items
                .iter()
                .filter_map(|item| item.as_i64())
                .filter_map(|item| i32::try_from(item).ok())
                .collect(),
        )
    }

    /// Parses a string field with `parse`, e.g. `input.parse_with("status", PetStatus::parse)`.
    pub fn parse_with<T>(&self, key: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
        self.str(key).and_then(parse)
    }

    /// Partial update value for `key`.
    ///
    /// `None` when the key is missing, `Some(None)` when it is `null` or unreadable and
    /// `Some(Some(value))` otherwise, so nullable columns can be cleared explicitly.
    pub fn patch<T>(&self, key: &str, read: impl Fn(&Self, &str) -> Option<T>) -> Option<Option<T>> {
        self.0.contains_key(key).then(|| read(self, key))
    }

    pub fn require_with<T>(
        &self,
        key: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, ValidationErrors> {
        self.parse_with(key, parse).ok_or_else(|| required(key))
    }
}

fn required(key: &str) -> ValidationErrors {
    ValidationErrors::single(key, format!("The {} field is required.", key))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Input;
    use crate::server::error::Error;

    #[test]
    fn empty_body_is_empty_object() {
        let input = Input::from_slice(b"  ").unwrap();

        assert!(input.0.is_empty());
    }

    #[test]
    fn rejects_non_object_body() {
        let result = Input::from_slice(b"[1, 2]");

        assert!(matches!(result, Err(Error::BadRequest(message)) if message == "Invalid JSON input"));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(Input::from_slice(b"{\"name\": ").is_err());
    }

    #[test]
    fn reads_integers_from_strings() {
        let input = Input::from(json!({"age": "12", "pet_id": 4, "bad": "x"}));

        assert_eq!(input.integer("age"), Some(12));
        assert_eq!(input.id("pet_id"), Some(4));
        assert_eq!(input.integer("bad"), None);
    }

    #[test]
    fn null_and_empty_are_absent() {
        let input = Input::from(json!({"notes": null, "phone": ""}));

        assert!(!input.has("notes"));
        assert_eq!(input.opt_string("phone"), None);
        assert!(input.string("phone").is_err());
    }

    #[test]
    fn patch_distinguishes_missing_from_null() {
        let input = Input::from(json!({"breed": null, "name": "Rex"}));

        assert_eq!(input.patch("breed", Input::opt_string), Some(None));
        assert_eq!(input.patch("name", Input::opt_string), Some(Some("Rex".to_string())));
        assert_eq!(input.patch("species", Input::opt_string), None);
    }

    #[test]
    fn id_list_skips_non_integers() {
        let input = Input::from(json!({"notification_ids": [1, "x", 3]}));

        assert_eq!(input.id_list("notification_ids"), Some(vec![1, 3]));
    }
}
