use dioxus::prelude::*;

/// A permanently disabled action button for features that only exist as
/// mockups. Carries a tooltip so operators know nothing is wired up.
#[component]
pub fn MockActionButton(props: MockActionButtonProps) -> Element {
    let title = props
        .title
        .unwrap_or_else(|| "Simulation only - not implemented yet".to_string());

    rsx! {
        button {
            disabled: true,
            title: "{title}",
            class: "px-3 py-2 text-sm rounded-md border border-[var(--border-subtle)] text-[var(--text-tertiary)] cursor-not-allowed opacity-60",
            "{props.label}"
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct MockActionButtonProps {
    pub label: String,
    #[props(optional)]
    pub title: Option<String>,
}
