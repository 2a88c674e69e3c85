//! Mock media library
//!
//! Placeholder template-based media generator. Nothing is wired to a
//! generation pipeline; the buttons only mark where it would go.

use crate::ui::components::placeholder::MockActionButton;
use dioxus::prelude::*;

/// Destinations offered by the template picker.
pub const DESTINATIONS: [&str; 6] = ["عدن", "القاهرة", "الرياض", "جدة", "دبي", "الدوحة"];

#[component]
pub fn MediaLibrary() -> Element {
    let mut destination = use_signal(|| DESTINATIONS[0].to_string());
    let mut caption = use_signal(String::new);

    rsx! {
        section {
            class: "rounded-xl border border-[var(--border-subtle)] bg-[var(--bg-surface)] p-5",

            h3 { class: "text-lg font-semibold mb-3", "Media library (simple generator)" }

            div {
                class: "border border-dashed border-[var(--border-subtle)] rounded-md p-4 space-y-3",

                p {
                    class: "text-sm text-[var(--text-secondary)]",
                    "Pick a destination, write a caption, then press Generate (simulation)."
                }

                select {
                    class: "w-full appearance-none bg-[var(--bg-input)] border border-[var(--border-subtle)] text-sm rounded-md py-2 px-3 focus:outline-none focus:border-[var(--accent-primary)] transition-all",
                    onchange: move |evt| destination.set(evt.value()),
                    value: destination.read().clone(),

                    for place in DESTINATIONS {
                        option { value: "{place}", "{place}" }
                    }
                }

                input {
                    class: "w-full bg-[var(--bg-input)] border border-[var(--border-subtle)] text-sm rounded-md py-2 px-3 focus:outline-none focus:border-[var(--accent-primary)] transition-all",
                    r#type: "text",
                    placeholder: "Caption for the post",
                    value: caption.read().clone(),
                    oninput: move |evt| caption.set(evt.value()),
                }

                div {
                    class: "flex gap-2",
                    MockActionButton { label: "Generate 3 images" }
                    MockActionButton { label: "Generate 1 video" }
                }
            }

            p {
                class: "mt-3 text-xs text-[var(--text-tertiary)]",
                "Generated images and videos will appear here."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_list_is_populated() {
        assert!(!DESTINATIONS.is_empty());
        for place in DESTINATIONS {
            assert!(!place.is_empty());
        }
    }
}
