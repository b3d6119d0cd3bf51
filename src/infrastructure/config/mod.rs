use std::path::Path;
use std::time::Duration;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::notification::NotificationConfig;

/// Application settings: the simulated latencies and the notification display
/// configuration. Defaults are merged with `talentbridge.toml` (if present in
/// the app data dir) and `TALENTBRIDGE_`-prefixed environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub latency: LatencySettings,
    pub notification: NotificationConfig,
}

// Settings structs keep snake_case keys so `TALENTBRIDGE_LATENCY__SEARCH_MS`
// style env overrides line up with the field names after figment splits them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencySettings {
    /// Deferred-completion delay for a search, in milliseconds.
    pub search_ms: u64,
    /// Deferred-completion delay for clearing filters.
    pub clear_ms: u64,
    /// Simulated job-post submission latency.
    pub post_submit_ms: u64,
    /// Delay before navigating home after a successful posting.
    pub redirect_ms: u64,
}

impl Default for LatencySettings {
    fn default() -> Self {
        Self {
            search_ms: 1200,
            clear_ms: 600,
            post_submit_ms: 1500,
            redirect_ms: 1500,
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            latency: LatencySettings::default(),
            notification: NotificationConfig::default(),
        }
    }
}

impl AppSettings {
    pub fn load(config_dir: &Path) -> Self {
        let figment = Figment::from(Serialized::defaults(AppSettings::default()))
            .merge(Toml::file(config_dir.join("talentbridge.toml")))
            .merge(Env::prefixed("TALENTBRIDGE_").split("__"));

        match figment.extract() {
            Ok(settings) => settings,
            Err(err) => {
                warn!(error = %err, "Invalid settings; falling back to defaults");
                AppSettings::default()
            }
        }
    }

    pub fn search_latency(&self) -> Duration {
        Duration::from_millis(self.latency.search_ms)
    }

    pub fn clear_latency(&self) -> Duration {
        Duration::from_millis(self.latency.clear_ms)
    }

    pub fn post_submit_latency(&self) -> Duration {
        Duration::from_millis(self.latency.post_submit_ms)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.latency.redirect_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::Position;

    #[test]
    fn test_defaults_match_the_simulated_flow() {
        let settings = AppSettings::default();
        assert_eq!(settings.search_latency(), Duration::from_millis(1200));
        assert_eq!(settings.clear_latency(), Duration::from_millis(600));
        assert_eq!(settings.post_submit_latency(), Duration::from_millis(1500));
        assert_eq!(settings.notification.position, Position::BottomRight);
        assert_eq!(settings.notification.auto_close_ms, 3000);
    }

    #[test]
    fn test_load_without_config_file_uses_defaults() {
        figment::Jail::expect_with(|jail| {
            let settings = AppSettings::load(jail.directory());
            assert_eq!(settings.latency.search_ms, 1200);
            Ok(())
        });
    }

    #[test]
    fn test_env_override_reaches_nested_fields() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("TALENTBRIDGE_LATENCY__SEARCH_MS", "250");
            jail.set_env("TALENTBRIDGE_NOTIFICATION__AUTO_CLOSE_MS", "5000");
            let settings = AppSettings::load(jail.directory());
            assert_eq!(settings.latency.search_ms, 250);
            assert_eq!(settings.notification.auto_close_ms, 5000);
            // Untouched fields keep their defaults.
            assert_eq!(settings.latency.clear_ms, 600);
            Ok(())
        });
    }

    #[test]
    fn test_env_wins_over_config_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "talentbridge.toml",
                r#"
                [latency]
                redirect_ms = 900
                post_submit_ms = 800
                "#,
            )?;
            jail.set_env("TALENTBRIDGE_LATENCY__REDIRECT_MS", "100");
            let settings = AppSettings::load(jail.directory());
            assert_eq!(settings.latency.redirect_ms, 100);
            assert_eq!(settings.latency.post_submit_ms, 800);
            Ok(())
        });
    }
}
