//! UI components for TravelDesk
//!
//! This module contains all user interface components built with Dioxus.

pub mod components;
pub mod dashboard;
pub mod media;
pub mod requests;

use crate::app::{AppState, BackendState};
use crate::ui::dashboard::Dashboard;
use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum Theme {
    Light,
    Dark,
}

impl Theme {
    fn from_name(name: &str) -> Self {
        match name {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Main Application Layout
#[component]
pub fn Layout() -> Element {
    let app_state = use_context::<AppState>();
    let initial_theme = Theme::from_name(&app_state.config.read().theme);
    let mut theme = use_signal(move || initial_theme);

    let backend = app_state.backend.read().clone();

    let mut config_signal = app_state.config.clone();
    let handle_theme_toggle = move |_| {
        let next = theme().toggle();
        theme.set(next);

        let mut config = config_signal.write();
        config.theme = next.as_str().to_string();
        if let Err(e) = config.save() {
            tracing::error!("Failed to persist theme: {}", e);
        }
    };

    rsx! {
        // Theme wrapper
        div {
            "data-theme": "{theme().as_str()}",
            class: "flex h-screen w-screen flex-col bg-[var(--bg-main)] text-[var(--text-primary)] transition-colors duration-300 overflow-hidden font-sans",

            // Link CSS - In a real build step we might bundle this, but for dev this works
            link { rel: "stylesheet", href: "assets/styles.css" }

            // Header
            header {
                class: "flex items-center justify-between px-6 py-4 bg-[var(--bg-header)] text-white shadow-md shrink-0",

                div {
                    h1 { class: "text-xl font-bold tracking-tight", "TravelDesk" }
                    p { class: "text-xs opacity-80", "Travel agency messaging dashboard - pilot" }
                }

                div {
                    class: "flex items-center gap-3",

                    BackendStatusPill { state: backend }

                    button {
                        onclick: handle_theme_toggle,
                        class: "p-2 rounded-full hover:bg-white/10 transition-all active:scale-95",
                        title: "Toggle Theme",

                        if theme() == Theme::Dark {
                            // Sun icon
                            svg { width: "20", height: "20", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2", stroke_linecap: "round", stroke_linejoin: "round", circle { cx: "12", cy: "12", r: "5" }, path { d: "M12 1v2M12 21v2M4.22 4.22l1.42 1.42M18.36 18.36l1.42 1.42M1 12h2M21 12h2M4.22 19.78l1.42-1.42M18.36 5.64l1.42-1.42" } }
                        } else {
                            // Moon icon
                            svg { width: "20", height: "20", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2", stroke_linecap: "round", stroke_linejoin: "round", path { d: "M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z" } }
                        }
                    }
                }
            }

            // Main Content Area
            main {
                class: "flex-1 overflow-y-auto bg-[var(--bg-main)]",
                Dashboard {}
            }
        }
    }
}

/// Small indicator showing whether the backend answered its health probe.
#[component]
fn BackendStatusPill(state: BackendState) -> Element {
    let (dot_class, label) = match state {
        BackendState::Unknown => ("bg-[var(--text-tertiary)]", "Checking backend"),
        BackendState::Online => ("bg-[var(--success)] animate-pulse", "Backend online"),
        BackendState::Offline => ("bg-[var(--error)]", "Backend offline"),
    };

    rsx! {
        div {
            class: "flex items-center gap-2 px-3 py-1 rounded-full bg-black/20 text-xs select-none",
            div { class: "w-2 h-2 rounded-full {dot_class}" }
            span { "{label}" }
        }
    }
}
