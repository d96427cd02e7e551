//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted arguments, verifying status codes, response
//! bodies and error mapping for every API endpoint.

mod review;
mod station;
