//! Authentication context and the gate that protects signed-in screens.

use api::{Gateway, Identity, RestGateway};
use dioxus::prelude::*;
use engine::auth::BaseMode;

use crate::{AuthScreen, LoadingSpinner};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub identity: Option<Identity>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            identity: None,
            loading: true,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// The backend gateway provided by the shell at the app root.
pub fn use_gateway() -> RestGateway {
    use_context::<RestGateway>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let gateway = use_gateway();
    let mut auth_state = use_signal(AuthState::default);

    // Probe the current identity on mount
    let _ = use_resource(move || {
        let gateway = gateway.clone();
        async move {
            match gateway.current_identity().await {
                Ok(identity) => {
                    auth_state.set(AuthState {
                        identity,
                        loading: false,
                    });
                }
                Err(err) => {
                    tracing::warn!(error = %err, "identity probe failed");
                    auth_state.set(AuthState {
                        identity: None,
                        loading: false,
                    });
                }
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Shows `children` when a session exists, the login flow otherwise.
#[component]
pub fn AuthGate(children: Element) -> Element {
    let auth = use_auth();

    if auth().loading {
        return rsx! {
            div {
                class: "flex min-h-screen items-center justify-center",
                LoadingSpinner { size: 32 }
            }
        };
    }

    if auth().identity.is_some() {
        return rsx! {
            {children}
        };
    }

    rsx! {
        AuthScreen { mode: BaseMode::Login }
    }
}
