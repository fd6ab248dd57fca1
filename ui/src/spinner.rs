//! A minimal loading spinner.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner(size: u32) -> Element {
    rsx! {
        span {
            class: "inline-block animate-spin rounded-full border-2 border-neutral-300 border-t-neutral-900",
            style: "width: {size}px; height: {size}px;",
        }
    }
}
