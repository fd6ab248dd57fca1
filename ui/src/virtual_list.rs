//! A fixed-row-height virtualized list.
//!
//! Only the rows inside the viewport (plus overscan) are materialized; a
//! full-height inner container and an offset wrapper keep the scrollbar
//! honest. The windowing math lives in [`engine::window`], this component
//! only wires it to scroll events.

use std::rc::Rc;

use dioxus::prelude::*;
use engine::window::{should_load_more, visible_range};

/// Virtualized list over `item_count` rows of `row_height` pixels each.
///
/// `render_row` materializes one row by index; rows past the loaded data are
/// the caller's concern (render a placeholder there). `on_load_more` fires
/// whenever the visible window comes within `threshold` rows of `loaded`.
#[component]
pub fn VirtualList(
    item_count: ReadOnlySignal<usize>,
    loaded: ReadOnlySignal<usize>,
    row_height: f64,
    height: f64,
    #[props(default = 2)] overscan: usize,
    #[props(default = 3)] threshold: usize,
    on_load_more: EventHandler<()>,
    render_row: Callback<usize, Element>,
) -> Element {
    let mut scroll_top = use_signal(|| 0.0f64);
    let mut container: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    // Ask for the next page whenever the window nears the unloaded tail.
    // Runs after render and again on every scroll or data change.
    use_effect(move || {
        let window = visible_range(scroll_top(), height, row_height, item_count(), overscan);
        if should_load_more(window, loaded(), threshold) {
            on_load_more.call(());
        }
    });

    let window = visible_range(scroll_top(), height, row_height, item_count(), overscan);
    let total_height = item_count() as f64 * row_height;
    let offset = window.start as f64 * row_height;

    rsx! {
        div {
            class: "overflow-y-auto",
            style: "height: {height}px;",
            onmounted: move |evt| container.set(Some(evt.data())),
            onscroll: move |_| {
                let Some(el) = container() else { return };
                spawn(async move {
                    if let Ok(offset) = el.get_scroll_offset().await {
                        scroll_top.set(offset.y);
                    }
                });
            },
            div {
                style: "height: {total_height}px; position: relative;",
                div {
                    style: "position: absolute; top: {offset}px; left: 0; right: 0;",
                    for index in window.start..window.end {
                        div {
                            key: "{index}",
                            style: "height: {row_height}px;",
                            {render_row.call(index)}
                        }
                    }
                }
            }
        }
    }
}
