use dioxus::prelude::*;

use ui::SearchPage;

/// Results view: route parameters feed the shared search screen.
#[component]
pub fn Search(q: String, city: String, category: String) -> Element {
    rsx! {
        SearchPage { q, city, category }
    }
}
