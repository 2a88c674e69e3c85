//! Root Dioxus application component
//!
//! This module contains the main App component that serves as the root of the UI tree.

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::ui::Layout;
use dioxus::prelude::*;

/// Reachability of the messaging backend, probed once at startup
#[derive(Clone, PartialEq, Debug)]
pub enum BackendState {
    Unknown,
    Online,
    Offline,
}

/// Global application state shared across components
#[derive(Clone)]
pub struct AppState {
    pub config: Signal<AppConfig>,
    pub backend: Signal<BackendState>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        tracing::info!("AppState initialized");
        Self {
            config: Signal::new(config),
            backend: Signal::new(BackendState::Unknown),
        }
    }

    /// Client bound to the configured base URL.
    pub fn api(&self) -> ApiClient {
        ApiClient::new(self.config.read().api_base_url.clone())
    }
}

#[component]
pub fn App() -> Element {
    let app_state = use_context_provider(|| AppState::new(AppConfig::load()));

    // One health probe per app start; a failure only dims the status pill.
    let api = app_state.api();
    let mut backend = app_state.backend.clone();
    use_future(move || {
        let api = api.clone();
        async move {
            match api.health().await {
                Ok(_) => backend.set(BackendState::Online),
                Err(e) => {
                    tracing::warn!("Backend health probe failed: {}", e);
                    backend.set(BackendState::Offline);
                }
            }
        }
    });

    rsx! {
        Layout {}
    }
}
