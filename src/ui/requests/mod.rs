//! Mock request inbox
//!
//! Hard-coded examples of incoming WhatsApp travel requests. The ingestion
//! pipeline does not exist yet, so the action buttons are permanently
//! disabled and the panel explains how to poke the webhook by hand.

use crate::app::AppState;
use crate::clamp_preview;
use crate::types::request::{sample_requests, TravelRequest};
use crate::ui::components::placeholder::MockActionButton;
use dioxus::prelude::*;

/// Longest message body shown on a card before clamping.
const PREVIEW_MAX_BYTES: usize = 280;

#[component]
pub fn RequestInbox() -> Element {
    let app_state = use_context::<AppState>();
    let webhook_url = app_state.api().webhook_url();

    let requests = use_signal(sample_requests);

    rsx! {
        section {
            class: "rounded-xl border border-[var(--border-subtle)] bg-[var(--bg-surface)] p-5",

            h3 { class: "text-lg font-semibold mb-3", "Incoming requests (WhatsApp simulation)" }

            // Operator hint for testing the backend by hand. The dashboard
            // itself never calls this endpoint.
            p {
                class: "text-sm text-[var(--text-secondary)] mb-2",
                "To exercise the backend, POST a message to "
                code { class: "font-mono text-xs bg-[var(--bg-hover)] px-1 py-0.5 rounded", "{webhook_url}" }
                ". Example bodies:"
            }
            ul {
                class: "list-disc pl-6 mb-4 text-sm text-[var(--text-secondary)] space-y-1",
                li { dir: "auto", "السلام عليكم اريد تذكرة عدن الى القاهرة 25/12" }
                li { "Hi I need flight Aden to Cairo 2025-12-25" }
            }

            div {
                class: "space-y-3",
                for request in requests.read().iter() {
                    RequestCard { key: "{request.id}", request: request.clone() }
                }
            }
        }
    }
}

#[component]
fn RequestCard(request: TravelRequest) -> Element {
    let preview = clamp_preview(&request.body, PREVIEW_MAX_BYTES);

    rsx! {
        div {
            class: "border border-[var(--border-subtle)] rounded-md p-3",

            div {
                class: "text-sm",
                b { "{request.sender_name}" }
                span { class: "text-[var(--text-tertiary)]", " — " }
                span { class: "font-mono text-xs text-[var(--text-secondary)]", "{request.from_number}" }
            }

            div {
                class: "mt-2 text-sm",
                dir: "auto",
                "{preview}"
            }

            div {
                class: "mt-3 flex gap-2",
                MockActionButton { label: "Collect matching requests" }
                MockActionButton { label: "Send unified reply" }
            }
        }
    }
}
