#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use axum_test::TestServer;
use chrono::Utc;
use link_gateway::infrastructure::backend::HttpLinkBackend;
use link_gateway::routes::app_router;
use link_gateway::state::AppState;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use url::Url;

/// In-memory link store behind the stub backing service.
#[derive(Clone, Default)]
pub struct StubStore {
    links: Arc<Mutex<Vec<Value>>>,
    created: Arc<Mutex<Vec<Value>>>,
}

impl StubStore {
    /// Inserts a link directly, bypassing the gateway.
    pub fn insert(&self, short_code: &str, long_url: &str, clicks: u64) {
        let mut links = self.links.lock().unwrap();
        let id = links.len() + 1;
        links.push(json!({
            "id": id,
            "short_code": short_code,
            "long_url": long_url,
            "clicks": clicks,
            "created_at": Utc::now().to_rfc3339(),
        }));
    }

    /// Short codes currently stored.
    pub fn codes(&self) -> Vec<String> {
        self.links
            .lock()
            .unwrap()
            .iter()
            .filter_map(|l| l["short_code"].as_str().map(str::to_owned))
            .collect()
    }

    /// Raw payloads received on `POST /api/links`, in order.
    pub fn received_payloads(&self) -> Vec<Value> {
        self.created.lock().unwrap().clone()
    }
}

async fn list_links(State(store): State<StubStore>) -> Json<Vec<Value>> {
    Json(store.links.lock().unwrap().clone())
}

async fn create_link(State(store): State<StubStore>, Json(payload): Json<Value>) -> Response {
    store.created.lock().unwrap().push(payload.clone());

    let short_code = payload["short_code"].as_str().unwrap_or_default().to_string();
    let long_url = payload["long_url"].as_str().unwrap_or_default().to_string();

    if store.codes().contains(&short_code) {
        return (
            StatusCode::CONFLICT,
            "Short code already exists or database error\n",
        )
            .into_response();
    }

    store.insert(&short_code, &long_url, 0);
    let created = store.links.lock().unwrap().last().cloned().unwrap_or_default();

    (StatusCode::CREATED, Json(created)).into_response()
}

async fn delete_link(State(store): State<StubStore>, Path(code): Path<String>) -> Response {
    let mut links = store.links.lock().unwrap();
    let before = links.len();
    links.retain(|l| l["short_code"] != code.as_str());

    if links.len() == before {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Short link not found" })),
        )
            .into_response()
    } else {
        StatusCode::NO_CONTENT.into_response()
    }
}

/// Starts a stub backing service on an ephemeral port.
///
/// Mimics the storage service contract: 201 on create, plain-text 409 on a
/// duplicate code, 204 on delete, 404 JSON for unknown codes, `OK` on `/health`.
pub async fn spawn_stub_backend() -> (String, StubStore) {
    let store = StubStore::default();

    let app = Router::new()
        .route("/api/links", get(list_links).post(create_link))
        .route("/api/links/{code}", delete(delete_link))
        .route("/health", get(|| async { "OK" }))
        .with_state(store.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), store)
}

/// Returns a base URL on which nothing is listening.
pub fn unreachable_backend_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn create_test_state(backend_url: &str) -> AppState {
    let backend =
        HttpLinkBackend::new(reqwest::Client::new(), Url::parse(backend_url).unwrap()).unwrap();
    AppState::new(backend)
}

/// Full application router on top of the given backend.
pub fn make_server(backend_url: &str) -> TestServer {
    TestServer::new(app_router(create_test_state(backend_url))).unwrap()
}

/// Full application router on top of a fresh stub backend.
pub async fn make_server_with_stub() -> (TestServer, StubStore) {
    let (url, store) = spawn_stub_backend().await;
    (make_server(&url), store)
}
