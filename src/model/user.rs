use serde_json::{Map, Value};

/// Current-user record as returned by the API.
///
/// The record is kept as an open JSON object since its shape belongs to the
/// remote API.
pub type UserRecord = Map<String, Value>;

/// Reads a string field of a user record
#[must_use]
pub fn user_field<'a>(user: &'a UserRecord, field: &str) -> Option<&'a str> {
    user.get(field).and_then(Value::as_str)
}
