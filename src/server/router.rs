//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI
//! serves interactive documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/stations` - List stations
/// - `GET /api/stations/{station_id}/stats` - Rating summary and per-aspect statistics
/// - `GET /api/stations/{station_id}/reviews` - Reviews with aspect ratings, newest first
/// - `POST /api/stations/{station_id}/reanalyze` - Queue a background re-analysis
/// - `POST /api/reviews` - Submit and analyze a review
/// - `DELETE /api/reviews/{review_id}` - Delete a review
///
/// The OpenAPI document is served at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db, classifier, locks, worker });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(
            title = "StationPulse",
            description = "Aspect-based sentiment analysis of commuter reviews"
        ),
        tags(
            (name = controller::station::STATION_TAG, description = "Station listing and statistics"),
            (name = controller::review::REVIEW_TAG, description = "Review submission"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::station::get_stations))
        .routes(routes!(controller::station::get_station_stats))
        .routes(routes!(controller::station::get_station_reviews))
        .routes(routes!(controller::station::reanalyze_station))
        .routes(routes!(controller::review::create_review))
        .routes(routes!(controller::review::delete_review))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
