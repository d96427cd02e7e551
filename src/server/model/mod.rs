//! Server application models and type definitions.
//!
//! Application state shared by HTTP handlers, database model type aliases, and the
//! background job definitions consumed by the worker pool.

pub mod app;
pub mod db;
pub mod worker;
