use dioxus::prelude::*;

use api::{GatewayConfig, RestGateway};
use ui::{AuthGate, AuthProvider};
use views::{Account, Home, Search, TabLayout};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(TabLayout)]
        #[route("/")]
        Home {},
        #[route("/search?:q&:city&:category")]
        Search { q: String, city: String, category: String },
        #[route("/account")]
        Account {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| RestGateway::new(GatewayConfig::from_env()));

    rsx! {
        document::Link { rel: "stylesheet", href: ui::TAILWIND_CSS }

        AuthProvider {
            AuthGate {
                Router::<Route> {}
            }
        }
    }
}
