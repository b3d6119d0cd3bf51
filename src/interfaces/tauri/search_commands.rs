use std::sync::Arc;

use tauri::State;

use crate::application::use_cases::job_search::{SearchDelivery, SearchView};
use crate::domain::error::Result;
use crate::domain::job::{JobListing, JobType, SearchCriteria};
use crate::infrastructure::catalog;

use super::state::AppState;

#[tauri::command]
pub fn search_view(state: State<'_, Arc<AppState>>) -> SearchView {
    state.job_search.view()
}

#[tauri::command]
pub async fn search_jobs(
    state: State<'_, Arc<AppState>>,
    criteria: SearchCriteria,
) -> Result<SearchDelivery> {
    state.job_search.search(criteria).await
}

#[tauri::command]
pub async fn clear_search_filters(
    state: State<'_, Arc<AppState>>,
) -> Result<Option<SearchDelivery>> {
    state.job_search.clear_filters().await
}

#[tauri::command]
pub fn open_job_details(state: State<'_, Arc<AppState>>, id: u32) -> Result<JobListing> {
    state.job_search.open_details(id)
}

#[tauri::command]
pub fn close_job_details(state: State<'_, Arc<AppState>>) {
    state.job_search.close_details();
}

#[tauri::command]
pub fn apply_to_job(state: State<'_, Arc<AppState>>) {
    state.job_search.apply_to_job();
}

#[tauri::command]
pub fn save_job(state: State<'_, Arc<AppState>>, id: u32) -> Result<()> {
    state.job_search.save_job(id)
}

/// Options for the location filter dropdown.
#[tauri::command]
pub fn search_locations() -> Vec<&'static str> {
    catalog::locations()
}

/// Options for the job-type filter dropdown.
#[tauri::command]
pub fn job_type_options() -> Vec<JobType> {
    JobType::ALL.to_vec()
}
