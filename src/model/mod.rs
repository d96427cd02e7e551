//! API data transfer objects shared by controllers and services.

pub mod api;
pub mod review;
pub mod station;
