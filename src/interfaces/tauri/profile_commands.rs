use std::sync::Arc;

use tauri::State;

use crate::application::use_cases::profile_wizard::WizardSnapshot;
use crate::domain::error::Result;
use crate::domain::profile::{EducationEntry, ExperienceEntry, LanguageEntry, SectionUpdate};
use crate::domain::validation::ValidationErrors;

use super::state::AppState;

#[tauri::command]
pub fn wizard_snapshot(state: State<'_, Arc<AppState>>) -> WizardSnapshot {
    state.profile_wizard.snapshot()
}

/// Validates the current step and advances on success. Validation errors come
/// back keyed by field so the form can render them inline.
#[tauri::command]
pub fn wizard_next(state: State<'_, Arc<AppState>>) -> Result<WizardSnapshot> {
    state.profile_wizard.try_advance()?;
    Ok(state.profile_wizard.snapshot())
}

#[tauri::command]
pub fn wizard_back(state: State<'_, Arc<AppState>>) -> WizardSnapshot {
    state.profile_wizard.retreat();
    state.profile_wizard.snapshot()
}

#[tauri::command]
pub fn wizard_update_section(state: State<'_, Arc<AppState>>, update: SectionUpdate) {
    state.profile_wizard.update_section(update);
}

#[tauri::command]
pub fn wizard_validate(state: State<'_, Arc<AppState>>) -> ValidationErrors {
    state.profile_wizard.validate_current_step()
}

#[tauri::command]
pub fn wizard_add_skill(state: State<'_, Arc<AppState>>, skill: String) -> bool {
    state.profile_wizard.add_skill(&skill)
}

#[tauri::command]
pub fn wizard_remove_skill(state: State<'_, Arc<AppState>>, index: usize) {
    state.profile_wizard.remove_skill(index);
}

#[tauri::command]
pub fn wizard_add_education(state: State<'_, Arc<AppState>>, entry: EducationEntry) -> bool {
    state.profile_wizard.add_education(entry)
}

#[tauri::command]
pub fn wizard_remove_education(state: State<'_, Arc<AppState>>, index: usize) {
    state.profile_wizard.remove_education(index);
}

#[tauri::command]
pub fn wizard_add_experience(state: State<'_, Arc<AppState>>, entry: ExperienceEntry) -> bool {
    state.profile_wizard.add_experience(entry)
}

#[tauri::command]
pub fn wizard_remove_experience(state: State<'_, Arc<AppState>>, index: usize) {
    state.profile_wizard.remove_experience(index);
}

#[tauri::command]
pub fn wizard_add_language(state: State<'_, Arc<AppState>>, entry: LanguageEntry) -> bool {
    state.profile_wizard.add_language(entry)
}

#[tauri::command]
pub fn wizard_remove_language(state: State<'_, Arc<AppState>>, index: usize) {
    state.profile_wizard.remove_language(index);
}

#[tauri::command]
pub fn wizard_attach_resume(state: State<'_, Arc<AppState>>, name: String, size: u64) {
    state.profile_wizard.attach_resume(name, size);
}

#[tauri::command]
pub fn wizard_clear_resume(state: State<'_, Arc<AppState>>) {
    state.profile_wizard.clear_resume();
}

#[tauri::command]
pub async fn wizard_submit(state: State<'_, Arc<AppState>>) -> Result<()> {
    state.profile_wizard.submit().await
}
