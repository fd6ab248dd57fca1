//! The account panel: who is signed in, and the way out.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaRightFromBracket;
use dioxus_free_icons::Icon;

use api::Gateway;

use crate::auth::{use_auth, use_gateway, AuthState};
use crate::strings;

#[component]
pub fn ProfilePanel() -> Element {
    let gateway = use_gateway();
    let mut auth = use_auth();

    let Some(identity) = auth().identity else {
        return rsx! {};
    };
    let label = identity
        .phone
        .clone()
        .or(identity.email.clone())
        .unwrap_or(identity.id.clone());

    let sign_out = move |_| {
        let gateway = gateway.clone();
        spawn(async move {
            if let Err(err) = gateway.sign_out().await {
                tracing::warn!(error = %err, "sign out failed");
            }
            // The local session is gone either way.
            auth.set(AuthState {
                identity: None,
                loading: false,
            });
        });
    };

    rsx! {
        div {
            class: "flex flex-col gap-4 px-4 py-6",

            div {
                class: "flex flex-col gap-1",
                span { class: "text-sm text-neutral-500", {strings::profile::SIGNED_IN_AS} }
                span { class: "text-base font-medium", "{label}" }
            }

            button {
                class: "flex h-11 w-full items-center justify-center gap-2 rounded border border-neutral-300 font-medium hover:bg-neutral-50",
                onclick: sign_out,
                Icon { icon: FaRightFromBracket, width: 16, height: 16 }
                {strings::profile::SIGN_OUT}
            }
        }
    }
}
