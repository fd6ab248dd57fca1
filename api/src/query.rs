//! Collection query description: filters, ordering, and an inclusive row range.
//!
//! A [`QuerySpec`] is built by the caller and interpreted by whatever
//! [`crate::Gateway`] implementation receives it — the REST gateway turns it
//! into PostgREST query parameters, the test double matches it structurally.

/// A single row predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Column equals value exactly.
    Eq { column: String, value: String },
    /// Case-insensitive substring match (`%pattern%` semantics are the
    /// caller's responsibility, as in SQL `ILIKE`).
    ILike { column: String, pattern: String },
}

/// One ordering key. Keys are applied in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub descending: bool,
}

/// Declarative description of a bounded collection query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuerySpec {
    /// Columns to project; empty means all columns.
    pub select: Vec<String>,
    pub filters: Vec<Filter>,
    pub order: Vec<Order>,
    /// Inclusive `(first_row, last_row)` window, zero-based.
    pub range: Option<(usize, usize)>,
}

impl QuerySpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Project the result down to the named columns.
    pub fn select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn eq(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push(Filter::Eq {
            column: column.into(),
            value: value.into(),
        });
        self
    }

    pub fn ilike(mut self, column: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.filters.push(Filter::ILike {
            column: column.into(),
            pattern: pattern.into(),
        });
        self
    }

    pub fn order_desc(mut self, column: impl Into<String>) -> Self {
        self.order.push(Order {
            column: column.into(),
            descending: true,
        });
        self
    }

    pub fn order_asc(mut self, column: impl Into<String>) -> Self {
        self.order.push(Order {
            column: column.into(),
            descending: false,
        });
        self
    }

    /// Restrict the result to the inclusive row window `[first, last]`.
    pub fn range(mut self, first: usize, last: usize) -> Self {
        self.range = Some((first, last));
        self
    }

    /// The equality value for `column`, if such a filter is present.
    pub fn eq_value(&self, column: &str) -> Option<&str> {
        self.filters.iter().find_map(|f| match f {
            Filter::Eq { column: c, value } if c == column => Some(value.as_str()),
            _ => None,
        })
    }
}
