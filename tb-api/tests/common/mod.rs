//! Shared test utilities for integration tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use tb_api::{ApiRequest, ApiResponse, TinybeansClient, Transport};
use tb_core::error::{TbError, TbResult};
use tb_models::{Child, Journal};

/// Transport that replays scripted responses in order and records every
/// request it sees. Requests past the end of the script fail, so a test
/// that over-fetches surfaces it as an error.
pub struct MockTransport {
    script: Mutex<VecDeque<ApiResponse>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Queue a response to hand out for the next request.
    pub fn push(&self, status: u16, body: Value) {
        self.script
            .lock()
            .unwrap()
            .push_back(ApiResponse { status, body });
    }

    /// All requests sent so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests sent so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> TbResult<ApiResponse> {
        let scripted = self.script.lock().unwrap().pop_front();
        let url = request.url.clone();
        self.requests.lock().unwrap().push(request);
        scripted.ok_or_else(|| TbError::Http(format!("unexpected request: {url}")))
    }
}

/// Client wired to a mock transport against a test base URL.
pub fn test_client(transport: Arc<MockTransport>) -> TinybeansClient {
    TinybeansClient::with_transport(
        transport,
        "https://tinybeans.test/api/1/",
        tb_core::constants::IOS_CLIENT_ID,
    )
}

/// Successful authenticate response body.
pub fn login_body() -> Value {
    json!({
        "accessToken": "tok-abc",
        "user": {
            "id": 10,
            "firstName": "Pat",
            "lastName": "Example",
            "emailAddress": "pat@example.com",
            "username": "pat"
        }
    })
}

/// Followings response with one parent journal containing one child.
pub fn followings_body() -> Value {
    json!({
        "followings": [{
            "id": 900,
            "URL": "https://tinybeans.com/app/followings/900",
            "relationship": {"label": "Father", "name": "father"},
            "journal": {
                "id": 555,
                "title": "The Does",
                "children": [{
                    "id": 1,
                    "firstName": "Ada",
                    "lastName": "Doe",
                    "gender": "female",
                    "dob": "2019-03-14"
                }]
            }
        }]
    })
}

/// A photo entry payload with the given id and timestamp (epoch ms).
pub fn entry_json(id: i64, timestamp_ms: i64) -> Value {
    json!({
        "id": id,
        "uuid": format!("uuid-{id}"),
        "timestamp": timestamp_ms,
        "type": "PHOTO",
        "caption": format!("entry {id}"),
        "blobs": {"o": format!("http://cdn.test/{id}.jpg")}
    })
}

/// One page of the entries feed.
pub fn page_json(entries: Vec<Value>, remaining: i64) -> Value {
    json!({
        "entries": entries,
        "numEntriesRemaining": remaining
    })
}

/// A journal with one attached child, for driving the pagination engine.
pub fn test_journal() -> Journal {
    let child: Child = serde_json::from_value(json!({
        "id": 1,
        "firstName": "Ada",
        "lastName": "Doe",
        "gender": "female",
        "dob": "2019-03-14"
    }))
    .expect("child payload");
    Journal::new(555, "The Does", vec![child])
}

/// Value of a query parameter on a recorded request, if present.
pub fn query_param(request: &ApiRequest, name: &str) -> Option<String> {
    request
        .query
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.clone())
}
