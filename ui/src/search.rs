//! The provider search screen: query bar, city picker and the virtualized
//! result list, all fed from one [`SearchFeed`].

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChevronDown, FaMagnifyingGlass};
use dioxus_free_icons::Icon;

use api::RestGateway;
use engine::search::{SearchFeed, SearchQuery};

use crate::auth::use_gateway;
use crate::strings;
use crate::{LoadingSpinner, ProviderCard, VirtualList};

const ROW_HEIGHT: f64 = 380.0;
const LIST_HEIGHT: f64 = 800.0;

/// The search screen. The shells pass the route parameters through; an empty
/// string means "no filter".
#[component]
pub fn SearchPage(q: ReadOnlySignal<String>, city: ReadOnlySignal<String>, category: ReadOnlySignal<String>) -> Element {
    let gateway = use_gateway();
    let feed: Rc<SearchFeed<RestGateway>> =
        use_hook(|| Rc::new(SearchFeed::new(gateway.clone())));

    // Bumped after every completed fetch so the list re-renders. The feed
    // itself is plain interior-mutability state, invisible to the runtime.
    let mut version = use_signal(|| 0u32);
    let mut cities = use_signal(Vec::<String>::new);
    let mut city_open = use_signal(|| false);
    let mut selected_city = use_signal(|| Option::<String>::None);

    // City list for the picker, fetched once.
    use_hook(|| {
        let feed = Rc::clone(&feed);
        spawn(async move {
            match feed.load_cities().await {
                Ok(list) => cities.set(list),
                Err(err) => tracing::warn!(error = %err, "city list fetch failed"),
            }
        });
    });

    let load_more = {
        let feed = Rc::clone(&feed);
        move |_| {
            let feed = Rc::clone(&feed);
            spawn(async move {
                match feed.load_more().await {
                    Ok(()) => version += 1,
                    Err(err) => {
                        tracing::warn!(error = %err, "search page fetch failed");
                        version += 1;
                    }
                }
            });
        }
    };

    // Route parameters and the picker both funnel into the feed's query.
    // `set_query` ignores an unchanged query, so running this every render
    // is safe; a real change resets the feed and the effect below refetches.
    let none_if_empty = |s: String| if s.is_empty() { None } else { Some(s) };
    let query = SearchQuery {
        text: q(),
        city: selected_city().or_else(|| none_if_empty(city())),
        category: none_if_empty(category()),
    };
    feed.set_query(query);

    version();
    let item_count = feed.item_count();
    let loaded = feed.len();
    let empty = feed.is_empty() && !feed.is_loading() && feed.cursor().exhausted;

    let city_label = selected_city().unwrap_or_else(|| strings::search::ALL_CITIES.to_string());

    let render_row = {
        let feed = Rc::clone(&feed);
        Callback::new(move |index: usize| match feed.item(index) {
            Some(provider) => rsx! {
                div {
                    class: "px-4 py-2",
                    ProviderCard { provider }
                }
            },
            None => rsx! {
                div {
                    class: "flex items-center justify-center",
                    style: "height: {ROW_HEIGHT}px;",
                    LoadingSpinner { size: 24 }
                }
            },
        })
    };

    rsx! {
        div {
            class: "flex min-h-screen flex-col bg-neutral-50",

            header {
                class: "flex flex-col gap-3 border-b border-neutral-200 bg-white px-4 py-3",

                div {
                    class: "flex h-10 items-center gap-2 rounded-lg border border-neutral-300 px-3",
                    Icon { icon: FaMagnifyingGlass, width: 16, height: 16 }
                    span {
                        class: "text-sm text-neutral-600",
                        if q().is_empty() {
                            {strings::search::PLACEHOLDER}
                        } else {
                            "{q}"
                        }
                    }
                }

                button {
                    class: "flex h-9 w-fit items-center gap-2 rounded-lg border border-neutral-300 px-3 text-sm",
                    onclick: move |_| city_open.set(!city_open()),
                    "{city_label}"
                    Icon { icon: FaChevronDown, width: 12, height: 12 }
                }

                if city_open() {
                    div {
                        class: "max-h-[240px] overflow-y-auto rounded-lg border border-neutral-200 bg-white",
                        button {
                            class: "block w-full px-3 py-2 text-left text-sm hover:bg-neutral-50",
                            onclick: move |_| {
                                selected_city.set(None);
                                city_open.set(false);
                            },
                            {strings::search::ALL_CITIES}
                        }
                        for option in cities() {
                            button {
                                key: "{option}",
                                class: "block w-full px-3 py-2 text-left text-sm hover:bg-neutral-50",
                                onclick: {
                                    let option = option.clone();
                                    move |_| {
                                        selected_city.set(Some(option.clone()));
                                        city_open.set(false);
                                    }
                                },
                                "{option}"
                            }
                        }
                    }
                }
            }

            if empty {
                div {
                    class: "flex flex-1 items-center justify-center text-neutral-500",
                    {strings::search::NO_RESULTS}
                }
            } else {
                VirtualList {
                    item_count,
                    loaded,
                    row_height: ROW_HEIGHT,
                    height: LIST_HEIGHT,
                    on_load_more: load_more,
                    render_row,
                }
            }
        }
    }
}
