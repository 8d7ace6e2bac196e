use crate::error::{CarouselError, Result};
use crate::github::GitHubClient;
use crate::https::redirect_to_https;
use crate::models::{CarouselItem, CarouselResponse, ErrorResponse, HealthResponse, LivenessResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub github: Arc<GitHubClient>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(github: GitHubClient) -> Self {
        Self {
            github: Arc::new(github),
            start_time: Instant::now(),
        }
    }
}

/// Optional surfaces of the router
#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    /// Serve the OpenAPI document (development only)
    pub api_docs: bool,
    /// Redirect plain-HTTP requests to this HTTPS port
    pub https_port: Option<u16>,
}

#[derive(OpenApi)]
#[openapi(
    paths(get_oldest_repositories),
    components(schemas(CarouselResponse, CarouselItem, ErrorResponse)),
    tags((name = "repositories", description = "Oldest organization repositories as a carousel"))
)]
pub struct ApiDoc;

pub fn create_router(state: AppState, options: RouterOptions) -> Router {
    let mut router = Router::new().route("/api/repositories/:language", get(get_oldest_repositories));

    if options.api_docs {
        router = router.route("/api-docs/openapi.json", get(openapi_document));
    }

    if let Some(port) = options.https_port {
        router = router.layer(middleware::from_fn_with_state(port, redirect_to_https));
    }

    // Probes stay reachable over plain HTTP
    let probes = Router::new()
        .route("/health", get(health_check))
        .route("/livez", get(liveness_check));

    router
        .merge(probes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Oldest repositories of a language, formatted as a carousel
#[utoipa::path(
    get,
    path = "/api/repositories/{language}",
    params(("language" = String, Path, description = "Programming language, e.g. `csharp`")),
    responses(
        (status = 200, description = "Up to five repositories, oldest first", body = CarouselResponse),
        (status = 404, description = "No repository matched", body = ErrorResponse),
        (status = 500, description = "Upstream payload could not be processed", body = ErrorResponse),
        (status = "default", description = "Non-success GitHub status returned unchanged with message \"Erro ao acessar a API do GitHub.\"", body = ErrorResponse)
    ),
    tag = "repositories"
)]
pub async fn get_oldest_repositories(
    State(state): State<AppState>,
    Path(language): Path<String>,
) -> Result<Json<CarouselResponse>> {
    let repositories = state
        .github
        .search_oldest_repositories(&language)
        .await?
        .and_then(|result| result.items)
        .unwrap_or_default();

    if repositories.is_empty() {
        return Err(CarouselError::NotFound);
    }

    info!("Found {} repositories for language '{}'", repositories.len(), language);

    Ok(Json(CarouselResponse::from_repositories(repositories)))
}

async fn openapi_document() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    };

    (StatusCode::OK, Json(response))
}

/// Kubernetes liveness probe - just checks if the process is alive
async fn liveness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(LivenessResponse {
            status: "alive".to_string(),
        }),
    )
}
