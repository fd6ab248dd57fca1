//! # API crate — the backend gateway contract and its REST implementation
//!
//! Everything the client knows about the remote backend lives here. The backend
//! itself is an external service speaking PostgREST conventions for record
//! collections (`/rest/v1`) and GoTrue conventions for phone-OTP identity
//! (`/auth/v1`); this crate reduces it to one trait.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`gateway`] | The [`Gateway`] trait: record queries/CRUD plus OTP identity operations |
//! | [`query`] | [`QuerySpec`] — composable filter/order/range description of a collection query |
//! | [`models`] | Client-safe record projections ([`ProviderSummary`], [`Category`], [`Identity`]) |
//! | [`rest`] | [`RestGateway`] — the production implementation over HTTP |
//! | [`config`] | [`GatewayConfig`] — base URL and API key, environment-driven |
//! | [`error`] | [`GatewayError`] taxonomy |
//!
//! The engines in the `engine` crate are generic over [`Gateway`], so tests run
//! against an in-memory double and the shells run against [`RestGateway`] with
//! no other changes.

pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod query;
pub mod rest;

pub use config::GatewayConfig;
pub use error::GatewayError;
pub use gateway::Gateway;
pub use models::{Category, CityRow, Identity, ProviderSummary};
pub use query::{Filter, Order, QuerySpec};
pub use rest::RestGateway;

/// Record collection names owned by the backend. Schemas are the backend's
/// business; the client only ever names them.
pub mod collections {
    pub const PROVIDERS: &str = "providers";
    pub const CATEGORIES: &str = "categories";
    pub const SERVICES: &str = "services";
    pub const SPECIALISTS: &str = "specialists";
    pub const REVIEWS: &str = "reviews";
    pub const APPOINTMENTS: &str = "appointments";
    pub const FAVORITES: &str = "favorites";
    pub const USERS: &str = "users";
    pub const PROVIDER_GALLERY: &str = "provider_gallery";
}
