//! Review submission and lookup errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("Station ID {0} not found")]
    StationNotFound(i32),
    #[error("Commuter ID {0} not found")]
    CommuterNotFound(i32),
    #[error("Review ID {0} not found")]
    ReviewNotFound(i32),
    #[error("Review text must not be blank")]
    EmptyText,
    #[error("Rating {0} is outside the allowed range of 1 to 5 stars")]
    RatingOutOfRange(i32),
}

impl IntoResponse for ReviewError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::StationNotFound(_) | Self::CommuterNotFound(_) | Self::ReviewNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Self::EmptyText | Self::RatingOutOfRange(_) => StatusCode::BAD_REQUEST,
        };

        tracing::debug!("Review request rejected: {}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
