use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// Transient, auto-dismissing user-facing message. The shell owns dismissal;
/// the configured duration rides along with each notification.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub severity: Severity,
    pub message: String,
    pub icon: &'static str,
    pub position: Position,
    pub auto_close_ms: u64,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(
        severity: Severity,
        message: impl Into<String>,
        icon: &'static str,
        config: &NotificationConfig,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            severity,
            message: message.into(),
            icon,
            position: config.position,
            auto_close_ms: config.auto_close_ms,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

// Snake_case keys: this struct is loaded from settings, where env overrides
// must match the field names. The camelCase surface is on `Notification`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    pub position: Position,
    pub auto_close_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            position: Position::BottomRight,
            auto_close_ms: 3000,
        }
    }
}
