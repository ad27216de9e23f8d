use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The serializable payload handed back to an API caller.
///
/// `message` is always present. `code`, `name` and `stack` are optional and
/// skipped when serialized if absent; any other named fields are flattened
/// into the same object. Extra fields are only reachable through
/// [`with_field`](ErrorOutput::with_field) and friends, which route the
/// well-known keys to their typed fields, so a serialized output never holds
/// a key twice.
///
/// # Examples
///
/// ```
/// use error_mapper::ErrorOutput;
///
/// let output = ErrorOutput::new("Not Found")
///     .with_code("E_NOT_FOUND")
///     .with_field("resource", "user");
///
/// let json = serde_json::to_value(&output).unwrap();
/// assert_eq!(
///     json,
///     serde_json::json!({
///         "message": "Not Found",
///         "code": "E_NOT_FOUND",
///         "resource": "user"
///     })
/// );
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorOutput {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl ErrorOutput {
    /// Creates an output holding only `message`.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), code: None, name: None, stack: None, extra: Map::new() }
    }

    #[inline]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[inline]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    #[inline]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[inline]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    /// Adds (or overwrites) an additional named field.
    ///
    /// The well-known keys `message`, `code`, `name` and `stack` are routed to
    /// their typed fields so the serialized object never holds duplicates.
    /// Non-string values for those keys are rendered as JSON text, except
    /// `null`, which clears an optional field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_field(key, value);
        self
    }

    /// In-place version of [`with_field`](Self::with_field).
    pub fn set_field(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        let text = match &value {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        };
        match key.as_str() {
            "message" => self.message = text.unwrap_or_default(),
            "code" => self.code = text,
            "name" => self.name = text,
            "stack" => self.stack = text,
            _ => {
                self.extra.insert(key, value);
            },
        }
    }

    /// Returns an additional named field.
    #[inline]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Removes an additional named field, returning it.
    #[inline]
    pub fn remove_field(&mut self, key: &str) -> Option<Value> {
        self.extra.remove(key)
    }

    /// Additional named fields, excluding the well-known ones.
    #[inline]
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

impl fmt::Display for ErrorOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(code) = &self.code {
            write!(f, " (code: {})", code)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorOutput {}

impl From<&str> for ErrorOutput {
    #[inline]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ErrorOutput {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
