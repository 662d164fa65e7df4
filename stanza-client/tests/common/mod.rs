//! In-process stand-in for the analysis service.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Router,
};
use stanza_client::Config;
use tokio::net::TcpListener;

/// What the stub saw for one `/analyze` call
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub body: serde_json::Value,
    pub content_type: Option<String>,
    pub accept: Option<String>,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: Vec<u8>,
    delay: Duration,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
}

pub struct StubServer {
    pub base_url: String,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
}

impl StubServer {
    pub async fn spawn(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self::spawn_with_delay(status, body, Duration::ZERO).await
    }

    pub async fn spawn_with_delay(status: u16, body: impl Into<Vec<u8>>, delay: Duration) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.into(),
            delay,
            received: received.clone(),
        };

        let app = Router::new()
            .route("/analyze", post(analyze))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            received,
        }
    }

    pub fn config(&self) -> Config {
        Config {
            base_url: self.base_url.clone(),
            request_timeout_seconds: None,
        }
    }

    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.received.lock().unwrap().clone()
    }
}

async fn analyze(
    State(state): State<StubState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    state.received.lock().unwrap().push(ReceivedRequest {
        body: serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null),
        content_type: header_value(header::CONTENT_TYPE),
        accept: header_value(header::ACCEPT),
    });

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}

/// Base URL of a local port with nothing listening on it.
pub async fn unused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
