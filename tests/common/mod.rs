#![allow(dead_code)]

use axum::{
    body::Body,
    extract::Request,
    http::{self, header, StatusCode},
    Router,
};
use oldest_repos_server::api::{create_router, AppState, RouterOptions};
use oldest_repos_server::github::GitHubClient;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower::ServiceExt;

/// Request as seen by the fake GitHub API
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: Option<String>,
    pub user_agent: Option<String>,
}

/// In-process stand-in for the GitHub search API
pub struct FakeGitHub {
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeGitHub {
    /// Serve `body` with `status` for every request.
    pub async fn start(status: StatusCode, body: impl Into<String>) -> Self {
        let body: String = body.into();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = requests.clone();

        let app = Router::new().fallback(move |req: Request| {
            let recorded = recorded.clone();
            let body = body.clone();
            async move {
                recorded.lock().await.push(RecordedRequest {
                    path: req.uri().path().to_string(),
                    query: req.uri().query().map(str::to_string),
                    user_agent: req
                        .headers()
                        .get(header::USER_AGENT)
                        .and_then(|h| h.to_str().ok())
                        .map(str::to_string),
                });
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }
        });

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake GitHub listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Fake GitHub server failed");
        });

        FakeGitHub {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    pub fn client(&self) -> GitHubClient {
        GitHubClient::with_base_url(&self.base_url).expect("Failed to create client")
    }

    pub fn router(&self) -> Router {
        self.router_with(RouterOptions::default())
    }

    pub fn router_with(&self, options: RouterOptions) -> Router {
        create_router(AppState::new(self.client()), options)
    }

    pub async fn recorded(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }
}

/// Upstream repository fixture: (full name, description, created at, avatar url)
pub type RepoFixture<'a> = (&'a str, Option<&'a str>, &'a str, Option<&'a str>);

/// Build a search API payload from fixtures
pub fn search_body(repos: &[RepoFixture<'_>]) -> String {
    let items: Vec<Value> = repos
        .iter()
        .map(|(full_name, description, created_at, avatar_url)| {
            json!({
                "id": 1,
                "name": full_name.split('/').last().unwrap_or_default(),
                "full_name": full_name,
                "description": description,
                "created_at": created_at,
                "owner": { "login": "takenet", "avatar_url": avatar_url },
            })
        })
        .collect();

    json!({
        "total_count": items.len(),
        "incomplete_results": false,
        "items": items,
    })
    .to_string()
}

/// Send a GET through the router and decode the JSON body
pub async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            http::Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Router failed");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response body is not JSON")
    };

    (status, body)
}
