use sea_orm::DatabaseConnection;

use crate::server::{
    absa::classifier::SentimentClassifier,
    error::Error,
    model::worker::WorkerJob,
    service::{
        analysis::{AnalysisLocks, ReviewAnalyzer},
        backfill::BackfillService,
        retry::RetryContext,
    },
};

/// Handler for processing worker jobs from the queue
///
/// Shares the classifier and analysis locks with the HTTP layer, so a background
/// re-analysis never overlaps with one started by a request.
pub struct WorkerJobHandler {
    db: DatabaseConnection,
    classifier: SentimentClassifier,
    locks: AnalysisLocks,
}

impl WorkerJobHandler {
    pub fn new(db: DatabaseConnection, classifier: SentimentClassifier, locks: AnalysisLocks) -> Self {
        Self {
            db,
            classifier,
            locks,
        }
    }

    /// Handle a worker job by delegating to the appropriate handler method
    pub async fn handle(&self, job: &WorkerJob) -> Result<(), Error> {
        match job {
            WorkerJob::AnalyzeReview { review_id } => self.analyze_review(*review_id).await,
            WorkerJob::ReanalyzeStation { station_id, limit } => {
                self.reanalyze_station(*station_id, *limit).await
            }
        }
    }

    /// Analyze a single review, retrying transient database failures
    pub async fn analyze_review(&self, review_id: i32) -> Result<(), Error> {
        tracing::debug!("Processing analysis for review_id: {}", review_id);

        let handler = self;
        let description = format!("review {} analysis", review_id);

        let outcome = RetryContext::new()
            .execute_with_retry(&description, move || async move {
                ReviewAnalyzer::new(&handler.db, &handler.classifier, &handler.locks)
                    .analyze_by_id(review_id)
                    .await
            })
            .await?;

        tracing::debug!(
            "Successfully analyzed review {} ({} aspect(s))",
            review_id,
            outcome.ratings.len()
        );

        Ok(())
    }

    pub async fn reanalyze_station(&self, station_id: i32, limit: Option<u64>) -> Result<(), Error> {
        tracing::debug!("Processing re-analysis for station_id: {}", station_id);

        let summary = BackfillService::new(&self.db, &self.classifier, &self.locks)
            .reanalyze(Some(station_id), limit)
            .await?;

        tracing::info!(
            "Re-analyzed station {}: {} review(s) processed, {} error(s)",
            station_id,
            summary.processed,
            summary.errors
        );

        Ok(())
    }
}
