//! The provider result card rendered by the search list.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaLocationDot, FaStar};
use dioxus_free_icons::Icon;

use api::ProviderSummary;

use crate::strings;

#[component]
pub fn ProviderCard(provider: ProviderSummary) -> Element {
    let rating = format!("{:.2}", provider.rating);

    rsx! {
        div {
            class: "flex h-full flex-col overflow-hidden rounded-xl border border-neutral-200 bg-white",

            div {
                class: "relative h-[180px] bg-neutral-100",
                if let Some(image) = &provider.image_url {
                    img {
                        class: "h-full w-full object-cover",
                        src: "{image}",
                        alt: "{provider.name}",
                        loading: "lazy",
                    }
                }
                if provider.promoted {
                    span {
                        class: "absolute left-2 top-2 rounded bg-neutral-900 px-2 py-0.5 text-xs font-medium text-white",
                        {strings::search::PROMOTED}
                    }
                }
                if let Some(logo) = &provider.logo_url {
                    img {
                        class: "absolute -bottom-5 left-4 h-12 w-12 rounded-full border-2 border-white object-cover",
                        src: "{logo}",
                        alt: "",
                    }
                }
            }

            div {
                class: "flex flex-1 flex-col gap-1.5 px-4 pb-4 pt-7",

                h3 { class: "text-base font-semibold", "{provider.name}" }

                div {
                    class: "flex items-center gap-1.5 text-sm",
                    Icon { icon: FaStar, width: 13, height: 13 }
                    span { class: "font-medium", "{rating}" }
                    span {
                        class: "text-neutral-500",
                        "({provider.reviews_count} "
                        {strings::search::REVIEWS}
                        ")"
                    }
                }

                div {
                    class: "mt-auto flex items-center gap-1.5 text-sm text-neutral-600",
                    Icon { icon: FaLocationDot, width: 13, height: 13 }
                    span { "{provider.address}, {provider.city}" }
                }
            }
        }
    }
}
