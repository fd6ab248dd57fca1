//! This crate contains all shared UI for the booking client shells.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

pub mod strings;

mod auth;
pub use auth::{use_auth, use_gateway, AuthGate, AuthProvider, AuthState};

mod auth_screens;
pub use auth_screens::AuthScreen;

mod spinner;
pub use spinner::LoadingSpinner;

mod provider_card;
pub use provider_card::ProviderCard;

mod virtual_list;
pub use virtual_list::VirtualList;

mod search;
pub use search::SearchPage;

mod profile;
pub use profile::ProfilePanel;

/// One second, on whichever timer the target has.
pub(crate) async fn sleep_one_second() {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_secs(1)).await;
}
