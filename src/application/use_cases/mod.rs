pub mod job_posting;
pub mod job_search;
pub mod notifier;
pub mod profile_wizard;
pub mod validation;
