use dioxus::prelude::*;

use ui::icons::{FaHouse, FaMagnifyingGlass, FaUser};
use ui::{Icon, ProfilePanel, SearchPage};

use crate::Route;

/// Bottom tab bar wrapped around every screen.
#[component]
pub fn TabLayout() -> Element {
    let tab = |route: Route, icon: Element, label: &'static str| {
        rsx! {
            Link {
                class: "flex flex-1 flex-col items-center gap-1 py-2 text-xs text-neutral-600",
                active_class: "text-neutral-900 font-medium",
                to: route,
                {icon}
                "{label}"
            }
        }
    };

    rsx! {
        div {
            class: "flex min-h-screen flex-col",

            div {
                class: "flex-1",
                Outlet::<Route> {}
            }

            nav {
                class: "flex border-t border-neutral-200 bg-white",
                {tab(
                    Route::Home {},
                    rsx! { Icon { icon: FaHouse, width: 18, height: 18 } },
                    "Home",
                )}
                {tab(
                    Route::Search { q: String::new(), city: String::new(), category: String::new() },
                    rsx! { Icon { icon: FaMagnifyingGlass, width: 18, height: 18 } },
                    "Search",
                )}
                {tab(
                    Route::Account {},
                    rsx! { Icon { icon: FaUser, width: 18, height: 18 } },
                    "Account",
                )}
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    let mut text = use_signal(String::new);
    let nav = use_navigator();

    rsx! {
        div {
            class: "flex flex-col gap-6 px-4 py-8",

            h1 { class: "text-2xl font-semibold", "Find local services" }

            form {
                class: "flex gap-2",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    nav.push(Route::Search {
                        q: text(),
                        city: String::new(),
                        category: String::new(),
                    });
                },
                input {
                    class: "h-11 flex-1 rounded border border-neutral-300 px-3",
                    placeholder: "Service, provider...",
                    value: text(),
                    oninput: move |evt: FormEvent| text.set(evt.value()),
                }
                button {
                    class: "h-11 rounded bg-neutral-900 px-4 font-medium text-white",
                    r#type: "submit",
                    "Go"
                }
            }
        }
    }
}

#[component]
pub fn Search(q: String, city: String, category: String) -> Element {
    rsx! {
        SearchPage { q, city, category }
    }
}

#[component]
pub fn Account() -> Element {
    rsx! {
        ProfilePanel {}
    }
}
