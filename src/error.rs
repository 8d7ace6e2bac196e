use crate::models::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

pub const UPSTREAM_ERROR_MESSAGE: &str = "Erro ao acessar a API do GitHub.";
pub const DESERIALIZATION_ERROR_MESSAGE: &str = "Erro ao processar a resposta da API.";
pub const NOT_FOUND_MESSAGE: &str = "Nenhum repositório encontrado.";
pub const INTERNAL_ERROR_MESSAGE: &str = "Erro interno ao processar a requisição.";

#[derive(Error, Debug)]
pub enum CarouselError {
    #[error("GitHub API returned status {0}")]
    UpstreamStatus(u16),

    #[error("JSON parsing error: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("No repositories found")]
    NotFound,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, CarouselError>;

impl CarouselError {
    /// Status code and body sent back to the caller.
    pub fn to_response_parts(&self) -> (StatusCode, ErrorResponse) {
        match self {
            CarouselError::UpstreamStatus(code) => (
                StatusCode::from_u16(*code).unwrap_or(StatusCode::BAD_GATEWAY),
                ErrorResponse::new(UPSTREAM_ERROR_MESSAGE),
            ),
            CarouselError::Deserialization(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::with_error(DESERIALIZATION_ERROR_MESSAGE, e.to_string()),
            ),
            CarouselError::NotFound => (StatusCode::NOT_FOUND, ErrorResponse::new(NOT_FOUND_MESSAGE)),
            CarouselError::Network(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::with_error(INTERNAL_ERROR_MESSAGE, e.to_string()),
            ),
            CarouselError::InvalidUrl(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::with_error(INTERNAL_ERROR_MESSAGE, e.to_string()),
            ),
        }
    }
}

impl IntoResponse for CarouselError {
    fn into_response(self) -> Response {
        let (status, body) = self.to_response_parts();

        if status.is_server_error() {
            error!("Request failed with {}: {}", status, self);
        } else {
            warn!("Request failed with {}: {}", status, self);
        }

        (status, Json(body)).into_response()
    }
}
