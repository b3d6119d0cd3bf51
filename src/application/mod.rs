pub mod use_cases;

pub use use_cases::job_posting::JobPostingUseCase;
pub use use_cases::job_search::JobSearchUseCase;
pub use use_cases::notifier::Notifier;
pub use use_cases::profile_wizard::ProfileWizardUseCase;
