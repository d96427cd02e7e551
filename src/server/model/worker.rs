//! Worker job definitions for background analysis.
//!
//! Jobs carry only the identifiers needed to reload their inputs from the database, so a
//! job enqueued before a review was edited or deleted always works on current data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Background job types processed by the worker pool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum WorkerJob {
    /// Re-run aspect analysis for a single review.
    AnalyzeReview {
        /// ID of the review to analyze.
        review_id: i32,
    },

    /// Re-run aspect analysis for the reviews of a station, newest first.
    ReanalyzeStation {
        /// ID of the station whose reviews are swept.
        station_id: i32,
        /// Maximum number of reviews to process, all reviews when `None`.
        limit: Option<u64>,
    },
}

impl fmt::Display for WorkerJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkerJob::AnalyzeReview { review_id } => {
                write!(f, "AnalyzeReview {{ review_id: {} }}", review_id)
            }
            WorkerJob::ReanalyzeStation {
                station_id,
                limit: Some(limit),
            } => write!(
                f,
                "ReanalyzeStation {{ station_id: {}, limit: {} }}",
                station_id, limit
            ),
            WorkerJob::ReanalyzeStation {
                station_id,
                limit: None,
            } => write!(f, "ReanalyzeStation {{ station_id: {} }}", station_id),
        }
    }
}
