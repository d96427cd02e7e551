//! Database fixtures inserted during test execution.
//!
//! - `station` - stations and the commuters who review them
//! - `review` - reviews and their per-aspect sentiment rows

pub mod review;
pub mod station;
