//! Recent passenger feed
//!
//! The one live view in the dashboard: on mount it asks the backend for
//! passengers seen in the last three months and renders them into a
//! read-only table. Any failure collapses to an empty table; the only trace
//! is a diagnostic log line.

use chrono::{DateTime, Local};
use dioxus::prelude::*;

use crate::api::{ApiError, RECENT_WINDOW_MONTHS};
use crate::app::AppState;
use crate::types::passenger::Passenger;

/// Feed lifecycle: `Empty` before the first response and after any failure,
/// `Loaded` only after a successful response (even a zero-row one).
/// A remount restarts the cycle from `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedPhase {
    Empty,
    Loaded,
}

/// Collapse a fetch outcome into displayable state.
///
/// Success keeps the backend's order untouched; failure resets the table
/// and leaves only a log line behind. No retry, nothing propagates.
pub fn resolve_feed(result: Result<Vec<Passenger>, ApiError>) -> (FeedPhase, Vec<Passenger>) {
    match result {
        Ok(passengers) => (FeedPhase::Loaded, passengers),
        Err(e) => {
            tracing::error!("Failed to fetch recent passengers: {}", e);
            (FeedPhase::Empty, Vec::new())
        }
    }
}

#[component]
pub fn PassengerFeed() -> Element {
    let app_state = use_context::<AppState>();

    // Owned by this view alone: replaced wholesale on fetch, dropped on unmount.
    let mut rows = use_signal(Vec::<Passenger>::new);
    let mut phase = use_signal(|| FeedPhase::Empty);
    let mut fetched_at = use_signal(|| None::<DateTime<Local>>);

    // One request per mount. The task is scoped to this component, so a
    // response arriving after unmount is dropped together with it.
    let api = app_state.api();
    use_future(move || {
        let api = api.clone();
        async move {
            let (next_phase, passengers) = resolve_feed(api.recent_passengers().await);
            phase.set(next_phase);
            rows.set(passengers);
            fetched_at.set(Some(Local::now()));
        }
    });

    let passengers = rows.read().clone();
    let row_count = passengers.len();
    let loaded = *phase.read() == FeedPhase::Loaded;
    let updated = fetched_at.read().as_ref().map(|t| t.format("%H:%M").to_string());

    rsx! {
        section {
            class: "rounded-xl border border-[var(--border-subtle)] bg-[var(--bg-surface)] p-5",

            div {
                class: "flex items-center justify-between mb-4",

                h2 {
                    class: "text-lg font-semibold",
                    "Passengers in the last {RECENT_WINDOW_MONTHS} months"
                }

                if loaded {
                    if let Some(ts) = updated {
                        span {
                            class: "text-xs text-[var(--text-tertiary)]",
                            "{row_count} records · updated {ts}"
                        }
                    }
                }
            }

            table {
                class: "w-full border-collapse text-sm",

                thead {
                    tr {
                        class: "bg-[var(--bg-hover)] text-left",
                        th { class: "p-2 font-medium", "Name" }
                        th { class: "p-2 font-medium", "Phone" }
                        th { class: "p-2 font-medium", "Email" }
                    }
                }

                tbody {
                    for passenger in passengers.iter() {
                        tr {
                            key: "{passenger.id}",
                            class: "border-b border-[var(--border-subtle)]",
                            td { class: "p-2", "{passenger.full_name}" }
                            td { class: "p-2 font-mono", "{passenger.phone}" }
                            td { class: "p-2", "{passenger.email}" }
                        }
                    }
                }
            }

            if row_count == 0 {
                div {
                    class: "px-2 py-4 text-xs text-[var(--text-tertiary)]",
                    "No passengers to show yet."
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passenger(id: i64, name: &str) -> Passenger {
        Passenger {
            id,
            full_name: name.to_string(),
            phone: format!("+96777100{:04}", id),
            email: format!("p{}@example.com", id),
        }
    }

    #[test]
    fn test_success_keeps_server_order() {
        let fetched = vec![passenger(3, "Sara"), passenger(1, "Ammar"), passenger(2, "Huda")];

        let (phase, rows) = resolve_feed(Ok(fetched.clone()));

        assert_eq!(phase, FeedPhase::Loaded);
        assert_eq!(rows, fetched);
    }

    #[test]
    fn test_failure_resets_to_empty() {
        let (phase, rows) = resolve_feed(Err(ApiError::Status(500)));

        assert_eq!(phase, FeedPhase::Empty);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_not_found_is_just_another_failure() {
        let (phase, rows) = resolve_feed(Err(ApiError::Status(404)));

        assert_eq!(phase, FeedPhase::Empty);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_empty_success_still_counts_as_loaded() {
        let (phase, rows) = resolve_feed(Ok(Vec::new()));

        assert_eq!(phase, FeedPhase::Loaded);
        assert!(rows.is_empty());
    }
}
