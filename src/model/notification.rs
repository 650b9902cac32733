//! Notification model
//!
//! Short-lived feedback shown in a page's title bar ("Copied link",
//! "Color scheme: dark", reload results).

use std::time::{Duration, Instant};

/// How long a notification stays visible
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

/// Kind of notification (determines color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Success - action completed (green)
    Success,
    /// Info - state change worth mentioning (cyan)
    Info,
}

/// A notification to display to the user
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= NOTIFICATION_TTL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(Notification::success("Copied").kind, NotificationKind::Success);
        assert_eq!(Notification::info("Color scheme: dark").kind, NotificationKind::Info);
    }

    #[test]
    fn test_fresh_notification_not_expired() {
        assert!(!Notification::success("Reloaded 12 commits").is_expired());
    }

    #[test]
    fn test_old_notification_expired() {
        let mut n = Notification::info("Color scheme: light");
        if let Some(past) = Instant::now().checked_sub(NOTIFICATION_TTL) {
            n.created_at = past;
            assert!(n.is_expired());
        }
    }
}
