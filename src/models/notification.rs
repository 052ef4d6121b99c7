/// Toast notification payload relayed to the frontend

use serde::{Deserialize, Serialize};

/// Visual theme of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// One auto-dismissing notice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_level() {
        assert_eq!(
            Notification::success("ok").level,
            NotificationLevel::Success
        );
        assert_eq!(Notification::error("bad").level, NotificationLevel::Error);
    }
}
