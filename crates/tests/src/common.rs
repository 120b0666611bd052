use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    Router,
};
use client::ApiClient;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A request as the mock backend saw it.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: String,
}

impl SeenRequest {
    pub fn json_body(&self) -> Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

#[derive(Default)]
struct MockState {
    routes: HashMap<(Method, String), (StatusCode, String)>,
    seen: Mutex<Vec<SeenRequest>>,
}

/// Canned-response stand-in for the admin REST API.
///
/// Unregistered routes answer `404` with an error body.
#[derive(Default)]
pub struct MockBackend {
    state: MockState,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method path` with a raw status and body.
    pub fn respond(
        mut self,
        method: Method,
        path: &str,
        status: StatusCode,
        body: impl Into<String>,
    ) -> Self {
        self.state
            .routes
            .insert((method, path.to_string()), (status, body.into()));
        self
    }

    /// Answer `GET path` with a successful envelope around `data`.
    pub fn get_ok(self, path: &str, data: Value) -> Self {
        let body = json!({ "success": true, "data": data }).to_string();
        self.respond(Method::GET, path, StatusCode::OK, body)
    }

    pub fn post_ok(self, path: &str, data: Value) -> Self {
        let body = json!({ "success": true, "data": data }).to_string();
        self.respond(Method::POST, path, StatusCode::OK, body)
    }

    /// Bind to an ephemeral port and serve in the background.
    pub async fn start(self) -> RunningBackend {
        let state = Arc::new(self.state);
        let router = Router::new().fallback(handle).with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("mock backend address");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("mock backend");
        });
        RunningBackend {
            base_url: format!("http://{addr}/api"),
            state,
        }
    }
}

pub struct RunningBackend {
    pub base_url: String,
    state: Arc<MockState>,
}

impl RunningBackend {
    /// Client without a token.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.base_url.clone())
    }

    pub fn client_with_token(&self, token: &str) -> ApiClient {
        self.client().with_token(Some(token.to_string()))
    }

    /// Every request received so far, oldest first.
    pub async fn seen(&self) -> Vec<SeenRequest> {
        self.state.seen.lock().await.clone()
    }

    /// The single request received so far.
    pub async fn only_request(&self) -> SeenRequest {
        let seen = self.seen().await;
        assert_eq!(seen.len(), 1, "expected exactly one request, got {seen:?}");
        seen.into_iter().next().expect("one request")
    }
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let path = uri.path().to_string();
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.seen.lock().await.push(SeenRequest {
        method: method.clone(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        authorization,
        body,
    });
    state
        .routes
        .get(&(method, path))
        .cloned()
        .unwrap_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                json!({ "message": "Route not found" }).to_string(),
            )
        })
}

/// A worker account as the backend returns it.
pub fn worker_json(id: u64, name: &str, kyc_status: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "phone": "+62 812 0000 0000",
        "role": "worker",
        "kycStatus": kyc_status,
        "status": "active",
        "skill": "Cleaning",
        "location": "Jakarta",
        "rating": "4.5"
    })
}
