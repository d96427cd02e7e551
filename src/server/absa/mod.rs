//! Aspect-based sentiment analysis engine.
//!
//! Keyword detection decides which aspects a review discusses, a pretrained pair classifier
//! judges each of them, and trend calculators annotate aggregated results. Persistence and
//! aggregation live in the service layer.

pub mod aspect;
pub mod classifier;
pub mod detector;
pub mod sentiment;
pub mod trend;
