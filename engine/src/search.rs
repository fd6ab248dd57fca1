//! # SearchFeed — incremental provider-search pagination
//!
//! Feeds the virtualized result list: one page per fetch, promoted-first then
//! rating-descending, with the filters of the current [`SearchQuery`] applied.
//! The engine defends against the two races the scroll-driven trigger creates:
//!
//! - **Duplicate triggers.** The list can ask for the next page several times
//!   before the first fetch resolves; an in-flight flag suppresses the extras.
//! - **Stale responses.** Changing the query starts a new run (fresh cursor,
//!   cleared results) and bumps a run token; a fetch that resolves with an old
//!   token is discarded on arrival. No network cancellation is needed.
//!
//! The cursor only moves when a fetch completes: a failed fetch leaves it
//! unchanged, so re-scrolling retries the same range.

use std::cell::RefCell;
use std::collections::HashSet;

use api::{collections, Category, CityRow, Gateway, GatewayError, ProviderSummary, QuerySpec};

/// Records requested per fetch.
pub const PAGE_SIZE: usize = 20;

/// The filter set of one pagination run. A changed value starts a new run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    /// Free-text match on the provider name; empty means no text filter.
    pub text: String,
    pub city: Option<String>,
    /// Category *name*; resolved to an id with one lookup per fetch. A name
    /// that matches no category applies no filter at all.
    pub category: Option<String>,
}

/// Where the next fetch starts and whether there is anything left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub page_index: usize,
    pub page_size: usize,
    /// Set once a fetch returns fewer than `page_size` records; never unset
    /// within a run.
    pub exhausted: bool,
}

impl PageCursor {
    fn fresh(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size,
            exhausted: false,
        }
    }
}

struct RunState {
    query: SearchQuery,
    cursor: PageCursor,
    items: Vec<ProviderSummary>,
    seen: HashSet<String>,
    /// Incremented on every query change; stale fetches compare against it.
    run: u64,
    in_flight: bool,
}

/// One instance per search screen; owns the result window exclusively.
pub struct SearchFeed<G> {
    gateway: G,
    state: RefCell<RunState>,
}

impl<G: Gateway> SearchFeed<G> {
    pub fn new(gateway: G) -> Self {
        Self::with_page_size(gateway, PAGE_SIZE)
    }

    pub fn with_page_size(gateway: G, page_size: usize) -> Self {
        Self {
            gateway,
            state: RefCell::new(RunState {
                query: SearchQuery::default(),
                cursor: PageCursor::fresh(page_size),
                items: Vec::new(),
                seen: HashSet::new(),
                run: 0,
                in_flight: false,
            }),
        }
    }

    pub fn query(&self) -> SearchQuery {
        self.state.borrow().query.clone()
    }

    pub fn cursor(&self) -> PageCursor {
        self.state.borrow().cursor
    }

    /// Loaded records, in fetch order.
    pub fn items(&self) -> Vec<ProviderSummary> {
        self.state.borrow().items.clone()
    }

    pub fn item(&self, index: usize) -> Option<ProviderSummary> {
        self.state.borrow().items.get(index).cloned()
    }

    pub fn len(&self) -> usize {
        self.state.borrow().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().items.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().in_flight
    }

    /// Rows the list should present: the loaded records plus one placeholder
    /// slot while more may exist. Scrolling the placeholder into view is the
    /// load-more trigger.
    pub fn item_count(&self) -> usize {
        let state = self.state.borrow();
        if state.cursor.exhausted {
            state.items.len()
        } else {
            state.items.len() + 1
        }
    }

    pub fn is_item_loaded(&self, index: usize) -> bool {
        index < self.state.borrow().items.len()
    }

    /// Adopt a new query. A value equal to the current one is ignored;
    /// anything else resets the cursor and result window and invalidates
    /// whatever is still in flight.
    pub fn set_query(&self, query: SearchQuery) {
        let mut state = self.state.borrow_mut();
        if state.query == query {
            return;
        }
        state.query = query;
        state.run = state.run.wrapping_add(1);
        state.cursor = PageCursor::fresh(state.cursor.page_size);
        state.items.clear();
        state.seen.clear();
        state.in_flight = false;
    }

    /// Fetch the next page for the current query.
    ///
    /// A no-op when the run is exhausted or a fetch for it is already in
    /// flight. On failure the cursor is untouched and the error is returned
    /// for the caller to surface; retrying re-requests the same range.
    pub async fn load_more(&self) -> Result<(), GatewayError> {
        let (run, query, page_index, page_size) = {
            let mut state = self.state.borrow_mut();
            if state.in_flight || state.cursor.exhausted {
                return Ok(());
            }
            state.in_flight = true;
            (
                state.run,
                state.query.clone(),
                state.cursor.page_index,
                state.cursor.page_size,
            )
        };

        let result = self.fetch_page(&query, page_index, page_size).await;

        let mut state = self.state.borrow_mut();
        if state.run != run {
            tracing::debug!(run, current = state.run, "discarding stale page fetch");
            return Ok(());
        }
        state.in_flight = false;

        let records = result?;
        let fetched = records.len();
        for record in records {
            if state.seen.insert(record.id.clone()) {
                state.items.push(record);
            }
        }
        state.cursor.exhausted = fetched < page_size;
        state.cursor.page_index += 1;
        Ok(())
    }

    async fn fetch_page(
        &self,
        query: &SearchQuery,
        page_index: usize,
        page_size: usize,
    ) -> Result<Vec<ProviderSummary>, GatewayError> {
        let mut spec = QuerySpec::new();
        if let Some(city) = &query.city {
            spec = spec.eq("city", city);
        }
        if let Some(category) = &query.category {
            if let Some(id) = self.resolve_category(category).await? {
                spec = spec.eq("category_id", id);
            }
        }
        if !query.text.is_empty() {
            spec = spec.ilike("name", format!("%{}%", query.text));
        }

        let first = page_index * page_size;
        spec = spec
            .order_desc("promoted")
            .order_desc("rating")
            .range(first, first + page_size - 1);

        self.gateway.query_records(collections::PROVIDERS, spec).await
    }

    /// Category name → id. An unknown name is not an error: the fetch simply
    /// runs without a category filter.
    async fn resolve_category(&self, name: &str) -> Result<Option<String>, GatewayError> {
        let spec = QuerySpec::new().eq("name", name).range(0, 0);
        let rows: Vec<Category> = self
            .gateway
            .query_records(collections::CATEGORIES, spec)
            .await?;
        if rows.is_empty() {
            tracing::debug!(category = name, "category matched no record, dropping filter");
        }
        Ok(rows.into_iter().next().map(|c| c.id))
    }

    /// Distinct provider cities, first-seen order, for the city picker. Only
    /// the `city` column crosses the wire; dedup happens here.
    pub async fn load_cities(&self) -> Result<Vec<String>, GatewayError> {
        let spec = QuerySpec::new().select(["city"]).order_asc("city");
        let rows: Vec<CityRow> = self
            .gateway
            .query_records(collections::PROVIDERS, spec)
            .await?;
        let mut seen = HashSet::new();
        Ok(rows
            .into_iter()
            .map(|row| row.city)
            .filter(|city| !city.is_empty() && seen.insert(city.clone()))
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockGateway;
    use api::Filter;
    use serde_json::{json, Value};
    use std::rc::Rc;
    use tokio::sync::oneshot;
    use tokio::task::{yield_now, LocalSet};

    fn provider(id: &str) -> Value {
        json!({
            "id": id,
            "name": format!("Provider {id}"),
            "rating": 4.5,
            "reviews_count": 12,
            "address": "Str. Exemplu 1",
            "city": "Cluj-Napoca",
            "promoted": false,
        })
    }

    fn providers(range: std::ops::Range<usize>) -> Vec<Value> {
        range.map(|i| provider(&format!("p{i}"))).collect()
    }

    fn feed() -> (MockGateway, SearchFeed<MockGateway>) {
        let gateway = MockGateway::new();
        (gateway.clone(), SearchFeed::new(gateway))
    }

    fn has_eq(spec: &QuerySpec, column: &str, value: &str) -> bool {
        spec.eq_value(column) == Some(value)
    }

    #[tokio::test]
    async fn test_two_page_scenario() {
        let (gateway, feed) = feed();
        gateway.push_rows(providers(0..20));
        gateway.push_rows(providers(20..27));

        feed.load_more().await.unwrap();
        assert_eq!(feed.cursor().page_index, 1);
        assert!(!feed.cursor().exhausted);
        assert_eq!(feed.len(), 20);
        assert_eq!(feed.item_count(), 21);
        assert!(feed.is_item_loaded(19));
        assert!(!feed.is_item_loaded(20));

        feed.load_more().await.unwrap();
        assert_eq!(feed.len(), 27);
        assert!(feed.cursor().exhausted);
        assert_eq!(feed.item_count(), 27);
        assert_eq!(feed.cursor().page_index, 2);

        // Requested ranges and ordering.
        let queries = gateway.queries();
        assert_eq!(queries.len(), 2);
        let (collection, first) = &queries[0];
        assert_eq!(collection, "providers");
        assert_eq!(first.range, Some((0, 19)));
        assert_eq!(first.order[0].column, "promoted");
        assert!(first.order[0].descending);
        assert_eq!(first.order[1].column, "rating");
        assert!(first.order[1].descending);
        assert_eq!(queries[1].1.range, Some((20, 39)));
    }

    #[tokio::test]
    async fn test_exhausted_run_stops_fetching() {
        let (gateway, feed) = feed();
        gateway.push_rows(providers(0..7));

        feed.load_more().await.unwrap();
        assert!(feed.cursor().exhausted);
        assert_eq!(gateway.queries().len(), 1);

        feed.load_more().await.unwrap();
        assert_eq!(gateway.queries().len(), 1, "no fetch after exhaustion");
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_cursor_for_retry() {
        let (gateway, feed) = feed();
        gateway.push_error(GatewayError::Status {
            status: 500,
            message: "boom".to_string(),
        });

        assert!(feed.load_more().await.is_err());
        assert_eq!(feed.cursor().page_index, 0);
        assert!(!feed.cursor().exhausted);
        assert!(feed.is_empty());

        gateway.push_rows(providers(0..20));
        feed.load_more().await.unwrap();
        assert_eq!(feed.len(), 20);

        // Both fetches asked for the same range.
        let queries = gateway.queries();
        assert_eq!(queries[0].1.range, Some((0, 19)));
        assert_eq!(queries[1].1.range, Some((0, 19)));
    }

    #[tokio::test]
    async fn test_duplicate_ids_appear_once() {
        let (gateway, feed) = feed();
        gateway.push_rows(providers(0..20));
        // Page boundary shifted underneath us: p19 comes back again.
        let mut second = vec![provider("p19")];
        second.extend(providers(20..26));
        gateway.push_rows(second);

        feed.load_more().await.unwrap();
        feed.load_more().await.unwrap();

        let ids: Vec<String> = feed.items().into_iter().map(|p| p.id).collect();
        let unique: HashSet<&String> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len());
        assert_eq!(feed.len(), 26);
    }

    #[tokio::test]
    async fn test_filters_compose() {
        let (gateway, feed) = feed();
        feed.set_query(SearchQuery {
            text: "spa".to_string(),
            city: Some("Cluj-Napoca".to_string()),
            category: Some("Hair".to_string()),
        });
        gateway.push_rows(vec![json!({ "id": "c1", "name": "Hair" })]);
        gateway.push_rows(providers(0..3));

        feed.load_more().await.unwrap();

        let queries = gateway.queries();
        assert_eq!(queries.len(), 2);

        let (collection, lookup) = &queries[0];
        assert_eq!(collection, "categories");
        assert!(has_eq(lookup, "name", "Hair"));
        assert_eq!(lookup.range, Some((0, 0)));

        let (collection, page) = &queries[1];
        assert_eq!(collection, "providers");
        assert!(has_eq(page, "city", "Cluj-Napoca"));
        assert!(has_eq(page, "category_id", "c1"));
        assert!(page.filters.iter().any(|f| matches!(
            f,
            Filter::ILike { column, pattern } if column == "name" && pattern == "%spa%"
        )));
    }

    #[tokio::test]
    async fn test_unknown_category_applies_no_filter() {
        let (gateway, feed) = feed();
        feed.set_query(SearchQuery {
            category: Some("Nonexistent".to_string()),
            ..SearchQuery::default()
        });
        gateway.push_rows(Vec::new()); // category lookup finds nothing
        gateway.push_rows(providers(0..2));

        feed.load_more().await.unwrap();

        let (_, page) = &gateway.queries()[1];
        assert_eq!(page.eq_value("category_id"), None);
        assert_eq!(feed.len(), 2);
    }

    #[tokio::test]
    async fn test_same_query_does_not_reset_run() {
        let (gateway, feed) = feed();
        gateway.push_rows(providers(0..20));
        feed.load_more().await.unwrap();

        feed.set_query(SearchQuery::default());
        assert_eq!(feed.len(), 20, "identical query keeps the run");
        assert_eq!(feed.cursor().page_index, 1);
    }

    #[test]
    fn test_concurrent_triggers_fetch_once() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let local = LocalSet::new();
        local.block_on(&runtime, async {
            let gateway = MockGateway::new();
            let feed = Rc::new(SearchFeed::new(gateway.clone()));

            let (release, gate) = oneshot::channel();
            gateway.push_rows_gated(providers(0..20), gate);

            let first = {
                let feed = Rc::clone(&feed);
                tokio::task::spawn_local(async move { feed.load_more().await })
            };
            yield_now().await;
            assert!(feed.is_loading());

            // The scroll trigger fires again before the first fetch resolves.
            feed.load_more().await.unwrap();
            feed.load_more().await.unwrap();
            assert_eq!(gateway.queries().len(), 1, "extra triggers suppressed");

            release.send(()).unwrap();
            first.await.unwrap().unwrap();

            assert_eq!(feed.len(), 20);
            assert_eq!(feed.cursor().page_index, 1);
            assert!(!feed.is_loading());
        });
    }

    #[test]
    fn test_stale_fetch_discarded_after_query_change() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let local = LocalSet::new();
        local.block_on(&runtime, async {
            let gateway = MockGateway::new();
            let feed = Rc::new(SearchFeed::new(gateway.clone()));

            let (release, gate) = oneshot::channel();
            gateway.push_rows_gated(providers(0..20), gate);

            let stale = {
                let feed = Rc::clone(&feed);
                tokio::task::spawn_local(async move { feed.load_more().await })
            };
            yield_now().await;

            // User narrows the search while the old fetch is in flight.
            feed.set_query(SearchQuery {
                city: Some("Iasi".to_string()),
                ..SearchQuery::default()
            });
            gateway.push_rows(vec![provider("iasi-1"), provider("iasi-2")]);
            feed.load_more().await.unwrap();
            assert_eq!(feed.len(), 2);

            // The old run's records must never surface in the new window.
            release.send(()).unwrap();
            stale.await.unwrap().unwrap();

            let ids: Vec<String> = feed.items().into_iter().map(|p| p.id).collect();
            assert_eq!(ids, vec!["iasi-1".to_string(), "iasi-2".to_string()]);
            assert_eq!(feed.cursor().page_index, 1);
        });
    }

    #[tokio::test]
    async fn test_query_change_resets_window_and_cursor() {
        let (gateway, feed) = feed();
        gateway.push_rows(providers(0..20));
        feed.load_more().await.unwrap();
        assert_eq!(feed.len(), 20);

        feed.set_query(SearchQuery {
            text: "barber".to_string(),
            ..SearchQuery::default()
        });
        assert!(feed.is_empty());
        assert_eq!(feed.cursor().page_index, 0);
        assert!(!feed.cursor().exhausted);
        assert_eq!(feed.item_count(), 1, "placeholder row only");
    }

    #[tokio::test]
    async fn test_load_cities_dedups_and_skips_empty() {
        let (gateway, feed) = feed();
        gateway.push_rows(vec![
            json!({ "city": "Cluj-Napoca" }),
            json!({ "city": "Iasi" }),
            json!({ "city": "Cluj-Napoca" }),
            json!({ "city": "" }),
        ]);

        let cities = feed.load_cities().await.unwrap();
        assert_eq!(cities, vec!["Cluj-Napoca".to_string(), "Iasi".to_string()]);

        // Only the city column is requested.
        let (_, spec) = &gateway.queries()[0];
        assert_eq!(spec.select, vec!["city".to_string()]);
    }
}
