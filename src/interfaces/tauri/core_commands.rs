use std::sync::Arc;

use tauri::State;

use crate::domain::error::Result;
use crate::domain::home::HomeContent;
use crate::domain::notification::Notification;
use crate::domain::route::Route;
use crate::infrastructure::theme::ThemeMode;
use crate::shared::icons;

use super::state::AppState;

#[tauri::command]
pub fn home_content() -> HomeContent {
    HomeContent::build()
}

#[tauri::command]
pub fn navigate(state: State<'_, Arc<AppState>>, path: String) -> Route {
    let route = Route::parse(&path);
    *state.route.lock().unwrap() = route;
    route
}

#[tauri::command]
pub fn current_route(state: State<'_, Arc<AppState>>) -> Route {
    *state.route.lock().unwrap()
}

#[tauri::command]
pub fn current_theme(state: State<'_, Arc<AppState>>, system_prefers_dark: bool) -> ThemeMode {
    state.theme.lock().unwrap().current(system_prefers_dark)
}

#[tauri::command]
pub fn toggle_theme(state: State<'_, Arc<AppState>>, system_prefers_dark: bool) -> Result<ThemeMode> {
    let mode = state.theme.lock().unwrap().toggle(system_prefers_dark)?;
    match mode {
        ThemeMode::Dark => state.notifier.info("Dark mode activated", "Moon"),
        ThemeMode::Light => state.notifier.info("Light mode activated", "Sun"),
    }
    Ok(mode)
}

/// Hands pending toasts to the frontend. Each is delivered once.
#[tauri::command]
pub fn drain_notifications(state: State<'_, Arc<AppState>>) -> Vec<Notification> {
    state.notifier.drain()
}

#[tauri::command]
pub fn resolve_icon(name: String) -> &'static str {
    icons::resolve(&name)
}
