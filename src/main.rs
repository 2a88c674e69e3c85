//! TravelDesk - Travel Agency Messaging Dashboard
//!
//! A desktop dashboard showing recent passengers, incoming travel requests,
//! and a placeholder media generator for a travel-agency messaging backend.

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use traveldesk::app::App;

fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("traveldesk=info".parse().unwrap()))
        .init();

    info!("Starting TravelDesk v{}", env!("CARGO_PKG_VERSION"));

    // Launch Dioxus desktop application
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::default().with_window(
                WindowBuilder::new()
                    .with_title("TravelDesk")
                    .with_inner_size(LogicalSize::new(1200.0, 800.0)),
            ),
        )
        .launch(App);
}
