use dioxus::prelude::*;

use crate::Route;

/// Landing view: a search box that jumps straight into the results list.
#[component]
pub fn Home() -> Element {
    let mut text = use_signal(String::new);
    let nav = use_navigator();

    rsx! {
        div {
            class: "flex min-h-screen flex-col items-center justify-center gap-6 bg-white px-4",

            h1 { class: "text-3xl font-semibold", "Find local services" }

            form {
                class: "flex w-full max-w-[480px] gap-2",
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
                    class: "h-11 rounded bg-neutral-900 px-5 font-medium text-white",
                    r#type: "submit",
                    "Search"
                }
            }

            Link {
                class: "text-sm text-neutral-600 underline",
                to: Route::Account {},
                "My account"
            }
        }
    }
}
