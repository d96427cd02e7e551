//! Service layer for business logic and orchestration.
//!
//! Services coordinate repositories, the sentiment classifier and the worker queue:
//! analyzing and storing reviews, aggregating station statistics, sweeping existing reviews
//! for re-analysis, and retrying transient database failures.

pub mod aggregate;
pub mod analysis;
pub mod backfill;
pub mod retry;
pub mod review;
pub mod station;
