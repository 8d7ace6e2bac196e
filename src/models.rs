use crate::types::Repository;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One card of the carousel rendered by the chat-bot front end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CarouselItem {
    /// Repository full name (`owner/name`)
    pub title: String,
    /// Owner avatar URL
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    /// Repository description
    pub text: Option<String>,
}

impl From<Repository> for CarouselItem {
    fn from(repo: Repository) -> Self {
        CarouselItem {
            title: repo.full_name,
            image_url: repo.owner.and_then(|owner| owner.avatar_url),
            text: repo.description,
        }
    }
}

/// Carousel payload returned on success
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CarouselResponse {
    pub items: Vec<CarouselItem>,
}

impl CarouselResponse {
    /// Sort repositories by creation date, oldest first, and project them into cards.
    ///
    /// The sort is stable, so repositories created at the same instant keep
    /// the order the API returned them in.
    pub fn from_repositories(mut repositories: Vec<Repository>) -> Self {
        repositories.sort_by_key(|repo| repo.created_at);

        CarouselResponse {
            items: repositories.into_iter().map(CarouselItem::from).collect(),
        }
    }
}

/// Response for errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    pub fn with_error(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: Some(error.into()),
        }
    }
}

/// Liveness probe response (minimal, just indicates the process is running)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub status: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}
