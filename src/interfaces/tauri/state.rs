use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::application::use_cases::job_posting::{JobPostingUseCase, SimulatedBackend};
use crate::application::use_cases::job_search::JobSearchUseCase;
use crate::application::use_cases::notifier::Notifier;
use crate::application::use_cases::profile_wizard::{LoggingSubmitter, ProfileWizardUseCase};
use crate::domain::error::Result;
use crate::domain::route::Route;
use crate::infrastructure::catalog;
use crate::infrastructure::config::AppSettings;
use crate::infrastructure::theme::ThemeService;

pub struct AppState {
    pub profile_wizard: ProfileWizardUseCase,
    pub job_search: JobSearchUseCase,
    pub job_posting: JobPostingUseCase,
    pub notifier: Notifier,
    pub theme: Mutex<ThemeService>,
    pub route: Mutex<Route>,
}

impl AppState {
    pub fn build(settings: AppSettings, data_dir: PathBuf) -> Result<Self> {
        let notifier = Notifier::new(settings.notification.clone());
        let catalog = Arc::new(catalog::job_listings());

        let profile_wizard =
            ProfileWizardUseCase::new(Arc::new(LoggingSubmitter), notifier.clone());
        let job_search = JobSearchUseCase::new(
            catalog,
            notifier.clone(),
            settings.search_latency(),
            settings.clear_latency(),
        );
        let job_posting = JobPostingUseCase::new(
            Arc::new(SimulatedBackend::new(settings.post_submit_latency())),
            notifier.clone(),
            settings.redirect_delay(),
        );
        let theme = Mutex::new(ThemeService::new(data_dir)?);

        Ok(Self {
            profile_wizard,
            job_search,
            job_posting,
            notifier,
            theme,
            route: Mutex::new(Route::Home),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_starts_at_home() {
        let dir = std::env::temp_dir().join("talentbridge-state-build");
        std::fs::create_dir_all(&dir).unwrap();
        let state = AppState::build(AppSettings::default(), dir).unwrap();
        assert_eq!(*state.route.lock().unwrap(), Route::Home);
        assert!(state.notifier.drain().is_empty());
    }
}
