use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/register`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    pub login: String,
    pub password: String,
}

/// Successful registration payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterResponse {
    pub message: String,
}

/// Error body returned with a non-2xx status
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<Detail>,
}

/// The two `detail` shapes the backend produces, plus anything else.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Detail {
    Message(String),
    Fields(Vec<FieldError>),
    Other(Value),
}

/// One field-level validation error
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FieldError {
    pub loc: Vec<Value>,
    pub msg: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl FieldError {
    /// `loc` joined with `.`, followed by `: msg`.
    pub fn render(&self) -> String {
        let path = self
            .loc
            .iter()
            .map(|segment| match segment {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(".");
        format!("{}: {}", path, self.msg)
    }
}

impl Detail {
    /// Display text for a recognized shape, `None` otherwise.
    pub fn text(&self) -> Option<String> {
        match self {
            Detail::Message(message) => Some(message.clone()),
            Detail::Fields(fields) => Some(
                fields
                    .iter()
                    .map(FieldError::render)
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Detail::Other(_) => None,
        }
    }
}
