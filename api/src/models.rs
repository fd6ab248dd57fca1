//! Client-safe record projections.
//!
//! These are the row shapes the client actually reads; the backend may store
//! more columns, but only these cross the wire. All types are
//! `Serialize + Deserialize` so they can be decoded from gateway responses and
//! cached by the UI layer.

use serde::{Deserialize, Serialize};

/// One provider row as the search list renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews_count: i64,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub promoted: bool,
}

/// Single-column projection for the distinct-cities query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityRow {
    #[serde(default)]
    pub city: String,
}

/// A service category (used to resolve a category name to its id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// The authenticated identity, as reported by the backend's identity endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
