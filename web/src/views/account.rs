use dioxus::prelude::*;

use ui::ProfilePanel;

#[component]
pub fn Account() -> Element {
    rsx! {
        ProfilePanel {}
    }
}
