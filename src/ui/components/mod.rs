//! Shared UI components
//!
//! Reusable pieces used by more than one dashboard panel.

pub mod placeholder;
