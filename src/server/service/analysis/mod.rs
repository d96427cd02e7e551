//! Review analysis: detect aspects, classify each one and persist the result.
//!
//! Classification happens before any write, then the old aspect rows are replaced and the
//! review's overall sentiment is updated in a single transaction. A per-review lock keeps at
//! most one analysis of a review in flight, whichever caller started it.

mod lock;

pub use lock::{AnalysisGuard, AnalysisLocks};

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    absa::{
        aspect::Aspect, classifier::SentimentClassifier, detector::detect_aspects,
        sentiment::Sentiment,
    },
    data::{aspect_rating::AspectRatingRepository, review::ReviewRepository},
    error::{review::ReviewError, Error},
    model::db::ReviewModel,
};

/// Result of analyzing one review.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub review_id: i32,
    /// Stored (aspect, sentiment) pairs in detection order
    pub ratings: Vec<(Aspect, Sentiment)>,
    /// Dominant sentiment of `ratings`, stored as the review's overall sentiment
    pub sentiment: Sentiment,
    /// Number of aspects that fell back to Neutral because classification failed
    pub degraded: usize,
}

pub struct ReviewAnalyzer<'a> {
    db: &'a DatabaseConnection,
    classifier: &'a SentimentClassifier,
    locks: &'a AnalysisLocks,
}

impl<'a> ReviewAnalyzer<'a> {
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

    /// Analyzes a review, replacing any aspect ratings it already has.
    ///
    /// Classifier failures never fail the analysis: the affected aspect is stored as
    /// Neutral and counted in [`AnalysisOutcome::degraded`]. Running this twice leaves
    /// the same rows as running it once.
    ///
    /// # Returns
    /// - `Ok(AnalysisOutcome)` - Rows stored for the review
    /// - `Err(Error::DbErr)` - Database error while replacing the rows, nothing was changed
    pub async fn analyze(&self, review: &ReviewModel) -> Result<AnalysisOutcome, Error> {
        let _guard = self.locks.lock(review.id).await;

        let (ratings, degraded) = self.classify(&review.text).await;
        let sentiment = overall_sentiment(&ratings);

        let txn = self.db.begin().await?;

        AspectRatingRepository::new(&txn)
            .delete_by_review_id(review.id)
            .await?;
        AspectRatingRepository::new(&txn)
            .create_many(review.id, &ratings)
            .await?;
        ReviewRepository::new(&txn)
            .update_sentiment(review.id, sentiment.as_str())
            .await?;

        txn.commit().await?;

        tracing::debug!(
            "Analyzed review {}: {} aspect(s), overall {} ({} degraded)",
            review.id,
            ratings.len(),
            sentiment,
            degraded
        );

        Ok(AnalysisOutcome {
            review_id: review.id,
            ratings,
            sentiment,
            degraded,
        })
    }

    /// Loads a review and analyzes it.
    ///
    /// # Returns
    /// - `Ok(AnalysisOutcome)` - Rows stored for the review
    /// - `Err(Error::ReviewError(ReviewError::ReviewNotFound))` - No review with this ID
    /// - `Err(Error::DbErr)` - Database error
    pub async fn analyze_by_id(&self, review_id: i32) -> Result<AnalysisOutcome, Error> {
        let review = ReviewRepository::new(self.db)
            .get(review_id)
            .await?
            .ok_or(ReviewError::ReviewNotFound(review_id))?;

        self.analyze(&review).await
    }

    /// Classifies every detected aspect of `text`.
    ///
    /// Returns the (aspect, sentiment) pairs together with the number of aspects that
    /// degraded to Neutral.
    async fn classify(&self, text: &str) -> (Vec<(Aspect, Sentiment)>, usize) {
        if text.trim().is_empty() {
            return (vec![(Aspect::General, Sentiment::Neutral)], 0);
        }

        let mut ratings = Vec::new();
        let mut degraded = 0;

        for aspect in detect_aspects(text) {
            let sentiment = match self.classifier.predict_sentiment(text, aspect).await {
                Ok(sentiment) => sentiment,
                Err(e) => {
                    tracing::warn!(
                        "Classification of aspect {} failed, storing Neutral: {}",
                        aspect,
                        e
                    );
                    degraded += 1;
                    Sentiment::Neutral
                }
            };

            ratings.push((aspect, sentiment));
        }

        (ratings, degraded)
    }
}

/// Dominant sentiment among a review's aspect ratings.
pub fn overall_sentiment(ratings: &[(Aspect, Sentiment)]) -> Sentiment {
    let mut counts = [0u64; 3];
    for (_, sentiment) in ratings {
        counts[sentiment.index()] += 1;
    }

    Sentiment::dominant(&counts)
}
