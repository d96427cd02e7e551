use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        review::{CreateReviewDto, ReviewDto},
    },
    server::{error::Error, model::app::AppState, service::review::ReviewService},
};

pub static REVIEW_TAG: &str = "review";

/// Submit a review
///
/// The review is analyzed before the response is sent, so the returned review already
/// carries its aspect ratings. A failed analysis still stores the review.
#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review stored and analyzed", body = ReviewDto),
        (status = 400, description = "Blank text or rating outside 1 to 5", body = ErrorDto),
        (status = 404, description = "Station or commuter not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    Json(payload): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, Error> {
    let review = ReviewService::new(
        &state.db,
        &state.classifier,
        &state.locks,
        &state.worker.queue,
    )
        .create(payload)
        .await?;

    Ok((StatusCode::CREATED, Json(review)))
}

/// Delete a review and its aspect ratings
#[utoipa::path(
    delete,
    path = "/api/reviews/{review_id}",
    tag = REVIEW_TAG,
    params(("review_id" = i32, Path, description = "ID of the review")),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    Path(review_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    ReviewService::new(
        &state.db,
        &state.classifier,
        &state.locks,
        &state.worker.queue,
    )
        .delete(review_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
