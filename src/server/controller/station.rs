use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        review::{ReanalyzeQueuedDto, ReviewDto},
        station::{StationDto, StationStatsDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{review::ReviewService, station::StationService},
    },
};

pub static STATION_TAG: &str = "station";

#[derive(Debug, Deserialize, IntoParams)]
pub struct ReanalyzeParams {
    /// Re-analyze at most this many of the newest reviews
    pub limit: Option<u64>,
}

/// List all stations
#[utoipa::path(
    get,
    path = "/api/stations",
    tag = STATION_TAG,
    responses(
        (status = 200, description = "Success when listing stations", body = Vec<StationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stations(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let stations = StationService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(stations)))
}

/// Get rating summary and per-aspect sentiment statistics for a station
#[utoipa::path(
    get,
    path = "/api/stations/{station_id}/stats",
    tag = STATION_TAG,
    params(("station_id" = i32, Path, description = "ID of the station")),
    responses(
        (status = 200, description = "Success when computing station statistics", body = StationStatsDto),
        (status = 404, description = "Station not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_station_stats(
    State(state): State<AppState>,
    Path(station_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let stats = StationService::new(&state.db).get_stats(station_id).await?;

    Ok((StatusCode::OK, Json(stats)))
}

/// Get a station's reviews with their aspect ratings, newest first
#[utoipa::path(
    get,
    path = "/api/stations/{station_id}/reviews",
    tag = STATION_TAG,
    params(("station_id" = i32, Path, description = "ID of the station")),
    responses(
        (status = 200, description = "Success when listing station reviews", body = Vec<ReviewDto>),
        (status = 404, description = "Station not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_station_reviews(
    State(state): State<AppState>,
    Path(station_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let reviews = ReviewService::new(
        &state.db,
        &state.classifier,
        &state.locks,
        &state.worker.queue,
    )
        .get_station_reviews(station_id)
        .await?;

    Ok((StatusCode::OK, Json(reviews)))
}

/// Queue a background re-analysis of a station's reviews
///
/// Returns as soon as the job is queued, results show up in the station statistics once
/// the worker finishes.
#[utoipa::path(
    post,
    path = "/api/stations/{station_id}/reanalyze",
    tag = STATION_TAG,
    params(
        ("station_id" = i32, Path, description = "ID of the station"),
        ReanalyzeParams
    ),
    responses(
        (status = 202, description = "Re-analysis queued", body = ReanalyzeQueuedDto),
        (status = 404, description = "Station not found", body = ErrorDto),
        (status = 503, description = "Workers are shutting down", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reanalyze_station(
    State(state): State<AppState>,
    Path(station_id): Path<i32>,
    Query(params): Query<ReanalyzeParams>,
) -> Result<impl IntoResponse, Error> {
    let queued = StationService::new(&state.db)
        .request_reanalysis(&state.worker.queue, station_id, params.limit)
        .await?;

    Ok((StatusCode::ACCEPTED, Json(queued)))
}
