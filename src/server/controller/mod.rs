//! HTTP controller endpoints for the stationpulse web API.
//!
//! Handlers extract request data, delegate to the service layer and return JSON responses.
//! Errors are returned as [`crate::server::error::Error`], which converts itself into the
//! matching status code. Every handler is annotated with utoipa for OpenAPI documentation.

pub mod review;
pub mod station;
