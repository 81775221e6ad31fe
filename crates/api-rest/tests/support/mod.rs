#![allow(dead_code)]
//! Shared harness for HTTP integration tests: a router over a throwaway store.

use api_rest::{router, AppState};
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;
use ward_core::{CoreConfig, DocumentStore};

pub struct TestApp {
    _data_dir: TempDir,
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let data_dir = TempDir::new().expect("Failed to create temp dir");
        let cfg = CoreConfig::new(data_dir.path().join("patient_data"))
            .expect("CoreConfig::new should succeed");
        let store = Arc::new(DocumentStore::open(&cfg).expect("store should open"));

        Self {
            _data_dir: data_dir,
            router: router(AppState::new(store)),
        }
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let body = match body {
            Some(value) => Body::from(value.to_string()),
            None => Body::empty(),
        };
        self.send(method, uri, body).await
    }

    /// Sends `raw` verbatim as a JSON body, for malformed payloads.
    pub async fn request_raw(&self, method: Method, uri: &str, raw: &str) -> (StatusCode, Value) {
        self.send(method, uri, Body::from(raw.to_owned())).await
    }

    async fn send(&self, method: Method, uri: &str, body: Body) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .expect("request should build");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router should respond");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body should collect")
            .to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body should be JSON")
        };

        (status, value)
    }

    /// Creates a patient from [`patient_payload`] and returns the stored document.
    pub async fn create_patient(&self) -> Value {
        let (status, body) = self
            .request(Method::POST, "/api/patients", Some(patient_payload()))
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body
    }

    pub async fn create_test(&self, patient_id: &str, payload: Value) -> (StatusCode, Value) {
        self.request(
            Method::POST,
            &format!("/api/patients/{patient_id}/tests"),
            Some(payload),
        )
        .await
    }
}

pub fn patient_payload() -> Value {
    json!({
        "name": { "first": "Ada", "last": "Lovelace" },
        "age": 36.5,
        "gender": "F",
        "room": "12B",
        "condition": "stable",
        "weight": "55kg",
        "height": "165cm",
        "date": "2024-03-01T09:30:00.000Z",
        "picture": "ada.png"
    })
}

pub fn heartbeat_test(nurse: &str) -> Value {
    json!({
        "date": "2024-03-02T08:00:00.000Z",
        "nurse_name": nurse,
        "type": "Routine",
        "category": "Heartbeat Rate",
        "reading": { "category": "Heartbeat Rate", "heartbeat_rate": 72 }
    })
}

pub fn id_of(doc: &Value) -> String {
    doc["_id"]
        .as_str()
        .expect("document should carry an _id")
        .to_owned()
}
