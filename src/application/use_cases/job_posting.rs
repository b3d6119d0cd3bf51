use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tokio::time::sleep;
use tracing::info;

use crate::application::use_cases::notifier::Notifier;
use crate::application::use_cases::validation;
use crate::domain::error::{AppError, Result};
use crate::domain::job_post::JobPostRecord;
use crate::domain::route::Route;
use crate::domain::validation::ValidationErrors;

/// External collaborator that receives an accepted job posting.
#[async_trait]
pub trait JobPostBackend: Send + Sync {
    async fn submit(&self, record: &JobPostRecord) -> Result<()>;
}

/// Bundled backend: sleeps the configured latency and accepts. It cannot
/// fail, but the caller's error path must survive for a real backend.
pub struct SimulatedBackend {
    latency: Duration,
}

impl SimulatedBackend {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl JobPostBackend for SimulatedBackend {
    async fn submit(&self, record: &JobPostRecord) -> Result<()> {
        sleep(self.latency).await;
        info!(title = %record.job_title, company = %record.company, "job posting accepted");
        Ok(())
    }
}

/// Instruction for the shell after a successful submission: navigate to the
/// target after the given delay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReport {
    pub redirect_to: Route,
    pub redirect_after_ms: u64,
}

pub struct JobPostingUseCase {
    backend: Arc<dyn JobPostBackend>,
    notifier: Notifier,
    submitting: AtomicBool,
    redirect_delay: Duration,
}

impl JobPostingUseCase {
    pub fn new(
        backend: Arc<dyn JobPostBackend>,
        notifier: Notifier,
        redirect_delay: Duration,
    ) -> Self {
        Self {
            backend,
            notifier,
            submitting: AtomicBool::new(false),
            redirect_delay,
        }
    }

    /// Synchronous per-keystroke/field validation for the shell. Nothing is
    /// mutated here; the authoritative check runs again inside `submit`.
    pub fn validate(&self, record: &JobPostRecord) -> ValidationErrors {
        validation::validate_job_post(record)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    /// Validates, then hands the record to the backend. Validation failure
    /// emits an aggregate error notification and nothing else happens; the
    /// record is the caller's to correct and resubmit.
    pub async fn submit(&self, record: JobPostRecord) -> Result<SubmitReport> {
        let errors = validation::validate_job_post(&record);
        if !errors.is_empty() {
            self.notifier
                .error("Please fix the errors in the form", "Warning");
            return Err(AppError::Validation(errors));
        }

        self.submitting.store(true, Ordering::SeqCst);
        let outcome = self.backend.submit(&record).await;
        self.submitting.store(false, Ordering::SeqCst);

        match outcome {
            Ok(()) => {
                self.notifier
                    .success("Job posting created successfully!", "Party");
                Ok(SubmitReport {
                    redirect_to: Route::Home,
                    redirect_after_ms: self.redirect_delay.as_millis() as u64,
                })
            }
            Err(err) => {
                // Unreachable with the simulated backend; kept for a real one.
                self.notifier
                    .error("Something went wrong. Please try again.", "Cross");
                Err(err)
            }
        }
    }
}
