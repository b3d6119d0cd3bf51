use std::sync::Arc;
use std::time::Duration;

use tauri::State;
use tracing::info;

use crate::application::use_cases::job_posting::SubmitReport;
use crate::domain::error::Result;
use crate::domain::job_post::JobPostRecord;
use crate::domain::validation::ValidationErrors;

use super::state::AppState;

#[tauri::command]
pub fn validate_job_post(state: State<'_, Arc<AppState>>, record: JobPostRecord) -> ValidationErrors {
    state.job_posting.validate(&record)
}

#[tauri::command]
pub fn job_post_submitting(state: State<'_, Arc<AppState>>) -> bool {
    state.job_posting.is_submitting()
}

/// Submits the posting. On success the route flips to the report's redirect
/// target after its delay, without blocking the command response.
#[tauri::command]
pub async fn submit_job_post(
    state: State<'_, Arc<AppState>>,
    record: JobPostRecord,
) -> Result<SubmitReport> {
    let report = state.job_posting.submit(record).await?;

    let app = state.inner().clone();
    let redirect_to = report.redirect_to;
    let delay = Duration::from_millis(report.redirect_after_ms);
    tauri::async_runtime::spawn(async move {
        tokio::time::sleep(delay).await;
        *app.route.lock().unwrap() = redirect_to;
        info!(route = redirect_to.path(), "redirected after job post");
    });

    Ok(report)
}
