//! End-to-end tests across services and the background worker.

mod backfill;
mod worker;
