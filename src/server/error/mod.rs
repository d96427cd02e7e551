//! Error types for the stationpulse server.
//!
//! Domain errors (configuration, classifier, review submission, worker queue) are aggregated
//! into the top-level [`Error`]. All errors implement `IntoResponse` so controllers can
//! return them directly, and use `thiserror` for their `Display` and `Error` impls.

pub mod classifier;
pub mod config;
pub mod retry;
pub mod review;
pub mod worker;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        classifier::ClassifierError, config::ConfigError, review::ReviewError,
        worker::WorkerError,
    },
};

/// Main error type for the stationpulse server.
///
/// Uses `thiserror`'s `#[from]` attribute so the underlying error types convert via `?`.
/// The `IntoResponse` implementation maps errors to HTTP responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Classifier errors (model loading, tokenization, inference, timeout)
/// - Review errors (validation, missing station/commuter/review)
/// - Worker queue errors (job dispatch)
/// - Database errors
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Sentiment classifier error (artifact loading, inference failure).
    #[error(transparent)]
    ClassifierError(#[from] ClassifierError),
    /// Review submission or lookup error.
    #[error(transparent)]
    ReviewError(#[from] ReviewError),
    /// Worker queue error (queue closed, job timeout).
    #[error(transparent)]
    WorkerError(#[from] WorkerError),
    /// Internal error indicating a bug in stationpulse's code.
    #[error("Internal error with stationpulse's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (binding the listener, serving requests).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For invalid review submissions
/// - 404 Not Found - For missing stations, commuters or reviews
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ReviewError(err) => err.into_response(),
            Self::WorkerError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
