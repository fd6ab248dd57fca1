//! # RestGateway — HTTP implementation of [`Gateway`]
//!
//! Speaks the two wire conventions the backend exposes:
//!
//! - **Record collections** under `/rest/v1/{collection}` (PostgREST style):
//!   filters as `column=eq.value` / `column=ilike.*pattern*` query parameters,
//!   ordering as `order=a.desc,b.desc`, row windows as `offset`/`limit`.
//! - **Identity** under `/auth/v1` (GoTrue style): `POST /otp` to dispatch a
//!   phone code, `POST /verify` to confirm it, `GET /user` for the current
//!   identity, `POST /logout` to end the session.
//!
//! Query-parameter construction is a pure function ([`query_pairs`]) so the
//! encoding rules are unit-tested without a network.

use std::cell::RefCell;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::models::Identity;
use crate::query::{Filter, QuerySpec};

/// Translate a [`QuerySpec`] into PostgREST query parameters.
///
/// `ILike` patterns use SQL `%` wildcards at the call site; PostgREST expects
/// `*`, so they are rewritten here.
pub fn query_pairs(spec: &QuerySpec) -> Vec<(String, String)> {
    let columns = if spec.select.is_empty() {
        "*".to_string()
    } else {
        spec.select.join(",")
    };
    let mut pairs = vec![("select".to_string(), columns)];

    for filter in &spec.filters {
        match filter {
            Filter::Eq { column, value } => {
                pairs.push((column.clone(), format!("eq.{value}")));
            }
            Filter::ILike { column, pattern } => {
                pairs.push((column.clone(), format!("ilike.{}", pattern.replace('%', "*"))));
            }
        }
    }

    if !spec.order.is_empty() {
        let order = spec
            .order
            .iter()
            .map(|o| {
                let dir = if o.descending { "desc" } else { "asc" };
                format!("{}.{}", o.column, dir)
            })
            .collect::<Vec<_>>()
            .join(",");
        pairs.push(("order".to_string(), order));
    }

    if let Some((first, last)) = spec.range {
        pairs.push(("offset".to_string(), first.to_string()));
        pairs.push(("limit".to_string(), (last.saturating_sub(first) + 1).to_string()));
    }

    pairs
}

#[derive(Debug, Deserialize)]
struct VerifyResponse {
    #[serde(default)]
    access_token: Option<String>,
}

/// Production [`Gateway`] over HTTP. Cheap to clone; clones share the session
/// token established by [`Gateway::verify_phone_code`].
#[derive(Clone)]
pub struct RestGateway {
    http: reqwest::Client,
    config: GatewayConfig,
    access_token: Rc<RefCell<Option<String>>>,
}

impl RestGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            access_token: Rc::new(RefCell::new(None)),
        }
    }

    fn rest_url(&self, collection: &str) -> String {
        format!("{}/rest/v1/{}", self.config.base_url, collection)
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.config.base_url, path)
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let bearer = self
            .access_token
            .borrow()
            .clone()
            .unwrap_or_else(|| self.config.api_key.clone());
        req.header("apikey", &self.config.api_key)
            .header("Authorization", format!("Bearer {bearer}"))
    }

    async fn check(resp: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = resp.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), %message, "backend rejected request");
        Err(GatewayError::Status {
            status: status.as_u16(),
            message,
        })
    }

    /// Rows matching `spec`, decoded as `T`.
    async fn rows<T: DeserializeOwned>(
        &self,
        collection: &str,
        spec: &QuerySpec,
    ) -> Result<Vec<T>, GatewayError> {
        let req = self
            .http
            .get(self.rest_url(collection))
            .query(&query_pairs(spec));
        let resp = Self::check(self.authorize(req).send().await?).await?;
        Ok(resp.json().await?)
    }
}

impl Gateway for RestGateway {
    async fn query_records<T: DeserializeOwned>(
        &self,
        collection: &str,
        spec: QuerySpec,
    ) -> Result<Vec<T>, GatewayError> {
        self.rows(collection, &spec).await
    }

    async fn get_record<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<T, GatewayError> {
        let spec = QuerySpec::new().eq("id", id).range(0, 0);
        let mut rows: Vec<T> = self.rows(collection, &spec).await?;
        if rows.is_empty() {
            return Err(GatewayError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }
        Ok(rows.remove(0))
    }

    async fn insert_record<T: DeserializeOwned>(
        &self,
        collection: &str,
        payload: Value,
    ) -> Result<T, GatewayError> {
        let req = self
            .http
            .post(self.rest_url(collection))
            .header("Prefer", "return=representation")
            .json(&payload);
        let resp = Self::check(self.authorize(req).send().await?).await?;
        let mut rows: Vec<T> = resp.json().await?;
        if rows.is_empty() {
            return Err(GatewayError::Decode(
                "insert returned no representation".to_string(),
            ));
        }
        Ok(rows.remove(0))
    }

    async fn update_record<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
        patch: Value,
    ) -> Result<T, GatewayError> {
        let req = self
            .http
            .patch(self.rest_url(collection))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(&patch);
        let resp = Self::check(self.authorize(req).send().await?).await?;
        let mut rows: Vec<T> = resp.json().await?;
        if rows.is_empty() {
            return Err(GatewayError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }
        Ok(rows.remove(0))
    }

    async fn delete_record(&self, collection: &str, id: &str) -> Result<(), GatewayError> {
        let req = self
            .http
            .delete(self.rest_url(collection))
            .query(&[("id", format!("eq.{id}"))]);
        Self::check(self.authorize(req).send().await?).await?;
        Ok(())
    }

    async fn request_phone_code(&self, phone: &str) -> Result<(), GatewayError> {
        let req = self.http.post(self.auth_url("otp")).json(&json!({ "phone": phone }));
        Self::check(self.authorize(req).send().await?).await?;
        Ok(())
    }

    async fn verify_phone_code(&self, phone: &str, code: &str) -> Result<(), GatewayError> {
        let req = self.http.post(self.auth_url("verify")).json(&json!({
            "phone": phone,
            "token": code,
            "type": "sms",
        }));
        let resp = Self::check(self.authorize(req).send().await?).await?;
        let verified: VerifyResponse = resp.json().await?;
        if let Some(token) = verified.access_token {
            self.access_token.borrow_mut().replace(token);
        }
        Ok(())
    }

    async fn current_identity(&self) -> Result<Option<Identity>, GatewayError> {
        let req = self.http.get(self.auth_url("user"));
        let resp = self.authorize(req).send().await?;
        let status = resp.status();
        // No session is an expected answer, not an error.
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Ok(None);
        }
        let resp = Self::check(resp).await?;
        Ok(Some(resp.json().await?))
    }

    async fn sign_out(&self) -> Result<(), GatewayError> {
        let req = self.http.post(self.auth_url("logout"));
        let resp = self.authorize(req).send().await?;
        self.access_token.borrow_mut().take();
        Self::check(resp).await?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(pairs: &[(String, String)], key: &str) -> Option<String> {
        pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
    }

    #[test]
    fn test_search_page_query_encoding() {
        let spec = QuerySpec::new()
            .eq("city", "Cluj-Napoca")
            .eq("category_id", "42")
            .order_desc("promoted")
            .order_desc("rating")
            .range(20, 39);
        let pairs = query_pairs(&spec);

        assert_eq!(pair(&pairs, "select").as_deref(), Some("*"));
        assert_eq!(pair(&pairs, "city").as_deref(), Some("eq.Cluj-Napoca"));
        assert_eq!(pair(&pairs, "category_id").as_deref(), Some("eq.42"));
        assert_eq!(pair(&pairs, "order").as_deref(), Some("promoted.desc,rating.desc"));
        assert_eq!(pair(&pairs, "offset").as_deref(), Some("20"));
        assert_eq!(pair(&pairs, "limit").as_deref(), Some("20"));
    }

    #[test]
    fn test_ilike_wildcards_rewritten() {
        let spec = QuerySpec::new().ilike("name", "%barber%");
        let pairs = query_pairs(&spec);
        assert_eq!(pair(&pairs, "name").as_deref(), Some("ilike.*barber*"));
    }

    #[test]
    fn test_projection_narrows_select() {
        let spec = QuerySpec::new().select(["city"]).order_asc("city");
        let pairs = query_pairs(&spec);
        assert_eq!(pair(&pairs, "select").as_deref(), Some("city"));
        assert_eq!(pair(&pairs, "order").as_deref(), Some("city.asc"));
    }

    #[test]
    fn test_no_order_no_range_emits_only_select() {
        let pairs = query_pairs(&QuerySpec::new());
        assert_eq!(pairs, vec![("select".to_string(), "*".to_string())]);
    }

    #[test]
    fn test_urls() {
        let gw = RestGateway::new(GatewayConfig::new("https://backend.example.com/", "k"));
        assert_eq!(gw.rest_url("providers"), "https://backend.example.com/rest/v1/providers");
        assert_eq!(gw.auth_url("otp"), "https://backend.example.com/auth/v1/otp");
    }
}
