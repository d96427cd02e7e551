//! Server application core modules.
//!
//! This module contains the stationpulse backend: the aspect-based sentiment analysis
//! engine, HTTP routing, database access, the review analysis and aggregation services,
//! and the background worker that re-analyzes stored reviews.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod absa;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod worker;
