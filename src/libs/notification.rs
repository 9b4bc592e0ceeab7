//! Short-lived status notifications.
//!
//! A notification is a message plus an expiry instant. Rendering code asks
//! [`Notification::is_visible`] instead of running a timer.

use chrono::{DateTime, Duration, Local};

/// How long a notification stays on screen.
pub const NOTIFICATION_TTL_SECS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub expires_at: DateTime<Local>,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind, now: DateTime<Local>) -> Self {
        Self {
            message: message.into(),
            kind,
            expires_at: now + Duration::seconds(NOTIFICATION_TTL_SECS),
        }
    }

    pub fn success(message: impl Into<String>, now: DateTime<Local>) -> Self {
        Self::new(message, NotificationKind::Success, now)
    }

    pub fn error(message: impl Into<String>, now: DateTime<Local>) -> Self {
        Self::new(message, NotificationKind::Error, now)
    }

    pub fn is_visible(&self, now: DateTime<Local>) -> bool {
        now < self.expires_at
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_for_three_seconds() {
        let now = Local::now();
        let notification = Notification::success("Todo added successfully!", now);

        assert!(notification.is_visible(now));
        assert!(notification.is_visible(now + Duration::milliseconds(2999)));
        assert!(!notification.is_visible(now + Duration::seconds(3)));
    }

    #[test]
    fn error_kind() {
        let notification = Notification::error("Failed to add todo", Local::now());
        assert!(notification.is_error());
    }
}
