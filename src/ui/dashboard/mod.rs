//! Dashboard page
//!
//! Mirrors the pilot layout: the live passenger feed on top, then the mock
//! request inbox and media library side by side.

pub mod passenger_feed;

use crate::ui::media::MediaLibrary;
use crate::ui::requests::RequestInbox;
use dioxus::prelude::*;
use passenger_feed::PassengerFeed;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div {
            class: "p-6 space-y-8 max-w-6xl mx-auto w-full",

            PassengerFeed {}

            div {
                class: "flex gap-6 flex-wrap",

                div { class: "flex-1 min-w-[320px]", RequestInbox {} }
                div { class: "w-[360px]", MediaLibrary {} }
            }
        }
    }
}
