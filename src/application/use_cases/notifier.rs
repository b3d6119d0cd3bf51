use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::domain::notification::{Notification, NotificationConfig, Severity};
use crate::shared::icons;

/// Notification center shared by the use cases. Explicitly constructed and
/// passed around rather than living in a global; the shell drains pending
/// notifications and handles their auto-dismissal.
#[derive(Clone)]
pub struct Notifier {
    pending: Arc<Mutex<Vec<Notification>>>,
    config: NotificationConfig,
}

impl Notifier {
    pub fn new(config: NotificationConfig) -> Self {
        Self {
            pending: Arc::new(Mutex::new(Vec::new())),
            config,
        }
    }

    pub fn info(&self, message: impl Into<String>, icon_name: &str) {
        self.push(Severity::Info, message.into(), icon_name);
    }

    pub fn success(&self, message: impl Into<String>, icon_name: &str) {
        self.push(Severity::Success, message.into(), icon_name);
    }

    pub fn error(&self, message: impl Into<String>, icon_name: &str) {
        self.push(Severity::Error, message.into(), icon_name);
    }

    fn push(&self, severity: Severity, message: String, icon_name: &str) {
        debug!(?severity, %message, "notification");
        let notification =
            Notification::new(severity, message, icons::resolve(icon_name), &self.config);
        self.pending.lock().unwrap().push(notification);
    }

    /// Hands all pending notifications to the caller, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        self.pending.lock().unwrap().drain(..).collect()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(NotificationConfig::default())
    }
}
