//! Scriptable in-memory [`Gateway`] for engine tests.
//!
//! Queued query responses are popped in call order; a response may carry a
//! oneshot gate so a test can hold a fetch in flight and release it after
//! interleaving other operations. Every call is recorded for assertions.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use serde_json::Value;
use tokio::sync::oneshot;

use api::{Gateway, GatewayError, Identity, QuerySpec};

struct QueuedQuery {
    result: Result<Vec<Value>, GatewayError>,
    gate: Option<oneshot::Receiver<()>>,
}

#[derive(Default)]
struct Inner {
    queued: VecDeque<QueuedQuery>,
    queries: Vec<(String, QuerySpec)>,
    code_requests: Vec<String>,
    verifications: Vec<(String, String)>,
    fail_code_request: bool,
    fail_verification: bool,
    identity: Option<Identity>,
    sign_outs: usize,
}

/// Cheap-to-clone test gateway; clones share state.
#[derive(Clone, Default)]
pub struct MockGateway {
    inner: Rc<RefCell<Inner>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue rows for the next `query_records` call.
    pub fn push_rows(&self, rows: Vec<Value>) {
        self.inner.borrow_mut().queued.push_back(QueuedQuery {
            result: Ok(rows),
            gate: None,
        });
    }

    /// Queue rows that are only delivered once `gate` fires.
    pub fn push_rows_gated(&self, rows: Vec<Value>, gate: oneshot::Receiver<()>) {
        self.inner.borrow_mut().queued.push_back(QueuedQuery {
            result: Ok(rows),
            gate: Some(gate),
        });
    }

    /// Queue a failure for the next `query_records` call.
    pub fn push_error(&self, err: GatewayError) {
        self.inner.borrow_mut().queued.push_back(QueuedQuery {
            result: Err(err),
            gate: None,
        });
    }

    pub fn fail_code_request(&self, fail: bool) {
        self.inner.borrow_mut().fail_code_request = fail;
    }

    pub fn fail_verification(&self, fail: bool) {
        self.inner.borrow_mut().fail_verification = fail;
    }

    pub fn set_identity(&self, identity: Option<Identity>) {
        self.inner.borrow_mut().identity = identity;
    }

    /// All `(collection, spec)` pairs seen so far.
    pub fn queries(&self) -> Vec<(String, QuerySpec)> {
        self.inner.borrow().queries.clone()
    }

    pub fn code_requests(&self) -> Vec<String> {
        self.inner.borrow().code_requests.clone()
    }

    pub fn verifications(&self) -> Vec<(String, String)> {
        self.inner.borrow().verifications.clone()
    }

    pub fn sign_outs(&self) -> usize {
        self.inner.borrow().sign_outs
    }
}

fn backend_rejection() -> GatewayError {
    GatewayError::Status {
        status: 400,
        message: "rejected".to_string(),
    }
}

impl Gateway for MockGateway {
    async fn query_records<T: serde::de::DeserializeOwned>(
        &self,
        collection: &str,
        spec: QuerySpec,
    ) -> Result<Vec<T>, GatewayError> {
        let queued = {
            let mut inner = self.inner.borrow_mut();
            inner.queries.push((collection.to_string(), spec));
            inner.queued.pop_front()
        };
        let Some(queued) = queued else {
            return Ok(Vec::new());
        };
        if let Some(gate) = queued.gate {
            let _ = gate.await;
        }
        queued
            .result?
            .into_iter()
            .map(|row| serde_json::from_value(row).map_err(|e| GatewayError::Decode(e.to_string())))
            .collect()
    }

    async fn get_record<T: serde::de::DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<T, GatewayError> {
        let spec = QuerySpec::new().eq("id", id).range(0, 0);
        let mut rows: Vec<T> = self.query_records(collection, spec).await?;
        if rows.is_empty() {
            return Err(GatewayError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }
        Ok(rows.remove(0))
    }

    async fn insert_record<T: serde::de::DeserializeOwned>(
        &self,
        _collection: &str,
        payload: Value,
    ) -> Result<T, GatewayError> {
        serde_json::from_value(payload).map_err(|e| GatewayError::Decode(e.to_string()))
    }

    async fn update_record<T: serde::de::DeserializeOwned>(
        &self,
        _collection: &str,
        _id: &str,
        patch: Value,
    ) -> Result<T, GatewayError> {
        serde_json::from_value(patch).map_err(|e| GatewayError::Decode(e.to_string()))
    }

    async fn delete_record(&self, _collection: &str, _id: &str) -> Result<(), GatewayError> {
        Ok(())
    }

    async fn request_phone_code(&self, phone: &str) -> Result<(), GatewayError> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_code_request {
            return Err(backend_rejection());
        }
        inner.code_requests.push(phone.to_string());
        Ok(())
    }

    async fn verify_phone_code(&self, phone: &str, code: &str) -> Result<(), GatewayError> {
        let mut inner = self.inner.borrow_mut();
        inner
            .verifications
            .push((phone.to_string(), code.to_string()));
        if inner.fail_verification {
            return Err(backend_rejection());
        }
        Ok(())
    }

    async fn current_identity(&self) -> Result<Option<Identity>, GatewayError> {
        Ok(self.inner.borrow().identity.clone())
    }

    async fn sign_out(&self) -> Result<(), GatewayError> {
        let mut inner = self.inner.borrow_mut();
        inner.sign_outs += 1;
        inner.identity = None;
        Ok(())
    }
}
