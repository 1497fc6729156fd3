use serde::Serialize;
use serde_json::Value;

/// The three-field projection of a raw user record.
///
/// Values are copied verbatim from the response body. A field missing from
/// the body is `None`; a field present as JSON `null` is `Some(Value::Null)`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UserSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Value>,
}

impl UserSummary {
    /// Picks `name`, `email` and `role` out of a decoded record, ignoring every
    /// other key. Non-object values yield a summary with all fields absent.
    pub fn from_raw(raw: &Value) -> Self {
        Self {
            name: raw.get("name").cloned(),
            email: raw.get("email").cloned(),
            role: raw.get("role").cloned(),
        }
    }

    /// Field name/value pairs in display order.
    pub fn fields(&self) -> [(&'static str, Option<&Value>); 3] {
        [
            ("name", self.name.as_ref()),
            ("email", self.email.as_ref()),
            ("role", self.role.as_ref()),
        ]
    }
}
