//! The [`Gateway`] trait — everything the client asks of the backend.
//!
//! An async interface in two halves: generic record-collection operations
//! (query/fetch/insert/update/delete over named collections) and the
//! OTP-capable identity operations (request a phone code, verify it, read the
//! current identity, sign out). Engines and screens are generic over this
//! trait, so the same logic runs against [`crate::RestGateway`] in the app and
//! against an in-memory double in tests.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;

use crate::error::GatewayError;
use crate::models::Identity;
use crate::query::QuerySpec;

pub trait Gateway {
    /// Run a bounded query against a named collection.
    fn query_records<T: DeserializeOwned>(
        &self,
        collection: &str,
        spec: QuerySpec,
    ) -> impl Future<Output = Result<Vec<T>, GatewayError>>;

    /// Fetch a single record by id. `NotFound` if it does not exist.
    fn get_record<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
    ) -> impl Future<Output = Result<T, GatewayError>>;

    /// Insert a record, returning the stored row.
    fn insert_record<T: DeserializeOwned>(
        &self,
        collection: &str,
        payload: Value,
    ) -> impl Future<Output = Result<T, GatewayError>>;

    /// Patch a record by id, returning the updated row.
    fn update_record<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
        patch: Value,
    ) -> impl Future<Output = Result<T, GatewayError>>;

    /// Delete a record by id.
    fn delete_record(
        &self,
        collection: &str,
        id: &str,
    ) -> impl Future<Output = Result<(), GatewayError>>;

    /// Ask the backend to send a one-time code to `phone` (E.164).
    fn request_phone_code(&self, phone: &str) -> impl Future<Output = Result<(), GatewayError>>;

    /// Confirm possession of `phone` with the received `code`. Success
    /// establishes the session.
    fn verify_phone_code(
        &self,
        phone: &str,
        code: &str,
    ) -> impl Future<Output = Result<(), GatewayError>>;

    /// The identity of the current session, if one is established.
    fn current_identity(&self) -> impl Future<Output = Result<Option<Identity>, GatewayError>>;

    /// Tear down the current session.
    fn sign_out(&self) -> impl Future<Output = Result<(), GatewayError>>;
}
