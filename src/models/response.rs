/// Uniform success envelope returned by every Tauri command

use serde::Serialize;
use serde_json::Value;

/// Human-readable message plus an optional typed payload
#[derive(Debug, Default, Serialize)]
pub struct CommandResponse {
    pub message: String,
    pub data: Option<Value>,
}

impl CommandResponse {
    /// Envelope with a message and no payload
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }

    /// Envelope carrying a serialized payload
    pub fn with_data(message: impl Into<String>, data: impl Serialize) -> Self {
        Self {
            message: message.into(),
            data: serde_json::to_value(data).ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_only() {
        let res = CommandResponse::message("done");
        assert_eq!(res.message, "done");
        assert!(res.data.is_none());
    }

    #[test]
    fn test_with_data_serializes_payload() {
        let res = CommandResponse::with_data("counted", 42usize);
        assert_eq!(res.data, Some(serde_json::json!(42)));
    }
}
