//! Re-analysis sweep over reviews that already exist.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    absa::{aspect::Aspect, classifier::SentimentClassifier},
    data::{aspect_rating::AspectRatingRepository, review::ReviewRepository},
    error::Error,
    service::analysis::{AnalysisLocks, ReviewAnalyzer},
};

/// Counts reported once a sweep finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackfillSummary {
    pub processed: u64,
    pub errors: u64,
}

pub struct BackfillService<'a> {
    db: &'a DatabaseConnection,
    classifier: &'a SentimentClassifier,
    locks: &'a AnalysisLocks,
}

impl<'a> BackfillService<'a> {
    const PROGRESS_INTERVAL: u64 = 10;

    pub fn new(
        db: &'a DatabaseConnection,
        classifier: &'a SentimentClassifier,
        locks: &'a AnalysisLocks,
    ) -> Self {
        Self {
            db,
            classifier,
            locks,
        }
    }

    /// Re-analyzes existing reviews, newest first.
    ///
    /// A review that fails to analyze is logged and counted in
    /// [`BackfillSummary::errors`]; the sweep continues with the next one.
    ///
    /// # Arguments
    /// - `station_id` - Only sweep this station's reviews, all stations when `None`
    /// - `limit` - Maximum number of reviews to sweep, no cap when `None`
    ///
    /// # Returns
    /// - `Ok(BackfillSummary)` - Sweep finished
    /// - `Err(Error::DbErr)` - The reviews to sweep could not be listed
    pub async fn reanalyze(
        &self,
        station_id: Option<i32>,
        limit: Option<u64>,
    ) -> Result<BackfillSummary, Error> {
        let review_ids = ReviewRepository::new(self.db)
            .get_ids_newest_first(station_id, limit)
            .await?;
        let total = review_ids.len();

        tracing::info!("Re-analyzing {} review(s)", total);

        let analyzer = ReviewAnalyzer::new(self.db, self.classifier, self.locks);
        let mut summary = BackfillSummary::default();

        for review_id in review_ids {
            match analyzer.analyze_by_id(review_id).await {
                Ok(_) => {
                    summary.processed += 1;
                    if summary.processed % Self::PROGRESS_INTERVAL == 0 {
                        tracing::info!("Processed {}/{} reviews", summary.processed, total);
                    }
                }
                Err(e) => {
                    summary.errors += 1;
                    tracing::error!("Error processing review {}: {}", review_id, e);
                }
            }
        }

        tracing::info!(
            "Completed: {} reviews processed, {} errors",
            summary.processed,
            summary.errors
        );

        Ok(summary)
    }

    /// Renames aspect ratings stored under legacy aspect names to their canonical names.
    ///
    /// Rows under legacy names are otherwise skipped by aggregation. Safe to run on every
    /// start: once renamed, nothing matches again.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows renamed
    /// - `Err(Error::DbErr)` - Database error, no row was renamed
    pub async fn standardize_aspect_names(&self) -> Result<u64, Error> {
        let txn = self.db.begin().await?;
        let repo = AspectRatingRepository::new(&txn);
        let mut renamed = 0;

        for (legacy, aspect) in Aspect::LEGACY_NAMES {
            let result = repo.rename_aspect(legacy, aspect.name()).await?;
            if result.rows_affected > 0 {
                tracing::info!(
                    "Updated {} rating(s): {} -> {}",
                    result.rows_affected,
                    legacy,
                    aspect
                );
            }
            renamed += result.rows_affected;
        }

        txn.commit().await?;

        Ok(renamed)
    }
}
