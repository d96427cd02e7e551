//! Worker queue error types.
//!
//! Worker errors indicate that a background job could not be enqueued or did not finish.
//! A closed queue means the server is shutting down and maps to 503, anything else is an
//! internal server error.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum WorkerError {
    /// The worker queue receiver was dropped, no further jobs can be accepted.
    #[error("Worker queue is closed, failed to enqueue job: {0}")]
    QueueClosed(String),

    /// A job exceeded the pool's job timeout.
    #[error("Job timed out after {seconds} seconds: {job}")]
    JobTimeout { job: String, seconds: u64 },
}

impl IntoResponse for WorkerError {
    fn into_response(self) -> Response {
        match self {
            Self::QueueClosed(_) => {
                tracing::warn!("{}", self);

                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorDto {
                        error: "Background workers are shutting down".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}
