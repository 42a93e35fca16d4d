#![allow(dead_code)]

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower_http::trace::TraceLayer;
use trucky_api_client::TruckyClient;

#[derive(Clone)]
pub enum Reply {
    Json(Value),
    Raw(StatusCode, &'static str),
    Delayed(Duration, Value),
}

struct MockState {
    routes: HashMap<String, Reply>,
    hits: Mutex<Vec<String>>,
}

/// Local stand-in for the Trucky API. Registered path+query strings get their canned
/// reply; anything else is echoed back as `{"uri": "<path?query>"}`.
pub struct MockApi {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockApi {
    pub async fn start(routes: Vec<(&str, Reply)>) -> Self {
        let state = Arc::new(MockState {
            routes: routes
                .into_iter()
                .map(|(path, reply)| (path.to_string(), reply))
                .collect(),
            hits: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .fallback(reply)
            .layer(TraceLayer::new_for_http())
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock api");
        let addr = listener.local_addr().expect("mock api address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve mock api");
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn client(&self) -> TruckyClient {
        TruckyClient::with_base_url(&self.base_url)
    }

    pub fn hits(&self) -> Vec<String> {
        self.state.hits.lock().unwrap().clone()
    }
}

async fn reply(State(state): State<Arc<MockState>>, uri: Uri) -> Response {
    let key = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    state.hits.lock().unwrap().push(key.clone());

    match state.routes.get(&key) {
        Some(Reply::Json(body)) => Json(body.clone()).into_response(),
        Some(Reply::Raw(status, body)) => (*status, *body).into_response(),
        Some(Reply::Delayed(delay, body)) => {
            tokio::time::sleep(*delay).await;
            Json(body.clone()).into_response()
        }
        None => Json(json!({ "uri": key })).into_response(),
    }
}

/// Base URL on which nothing is listening.
pub async fn closed_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{}", addr)
}
