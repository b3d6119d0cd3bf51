mod application;
mod domain;
mod infrastructure;
mod interfaces;
mod shared;

use std::sync::Arc;

use tauri::Manager;
use tracing::error;

use crate::infrastructure::config::AppSettings;
use crate::infrastructure::storage::resolve_app_data_dir;
use crate::interfaces::tauri::core_commands::{
    current_route, current_theme, drain_notifications, home_content, navigate, resolve_icon,
    toggle_theme,
};
use crate::interfaces::tauri::posting_commands::{
    job_post_submitting, submit_job_post, validate_job_post,
};
use crate::interfaces::tauri::profile_commands::{
    wizard_add_education, wizard_add_experience, wizard_add_language, wizard_add_skill,
    wizard_attach_resume, wizard_back, wizard_clear_resume, wizard_next, wizard_remove_education,
    wizard_remove_experience, wizard_remove_language, wizard_remove_skill, wizard_snapshot,
    wizard_submit, wizard_update_section, wizard_validate,
};
use crate::interfaces::tauri::search_commands::{
    apply_to_job, clear_search_filters, close_job_details, job_type_options, open_job_details,
    save_job, search_jobs, search_locations, search_view,
};
use crate::interfaces::tauri::AppState;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            let app_handle = app.handle().clone();

            let app_data_dir = resolve_app_data_dir(&app_handle).map_err(|err| {
                error!(error = %err, "Failed to resolve app data dir");
                err
            })?;

            let settings = AppSettings::load(&app_data_dir);
            let state = AppState::build(settings, app_data_dir).map_err(|err| {
                error!(error = %err, "Failed to build app state");
                err
            })?;
            app_handle.manage(Arc::new(state));

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            home_content,
            navigate,
            current_route,
            current_theme,
            toggle_theme,
            drain_notifications,
            resolve_icon,
            wizard_snapshot,
            wizard_next,
            wizard_back,
            wizard_update_section,
            wizard_validate,
            wizard_add_skill,
            wizard_remove_skill,
            wizard_add_education,
            wizard_remove_education,
            wizard_add_experience,
            wizard_remove_experience,
            wizard_add_language,
            wizard_remove_language,
            wizard_attach_resume,
            wizard_clear_resume,
            wizard_submit,
            search_view,
            search_jobs,
            clear_search_filters,
            open_job_details,
            close_job_details,
            apply_to_job,
            save_job,
            search_locations,
            job_type_options,
            validate_job_post,
            job_post_submitting,
            submit_job_post,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
