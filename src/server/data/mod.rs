//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries per table. Each is generic over `ConnectionTrait` so the
//! same code runs against a pooled connection or inside a transaction.

pub mod aspect_rating;
pub mod commuter;
pub mod review;
pub mod station;
