use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::review::{AspectRatingDto, CreateReviewDto, ReviewDto},
    server::{
        absa::classifier::SentimentClassifier,
        data::{
            aspect_rating::AspectRatingRepository, commuter::CommuterRepository,
            review::ReviewRepository, station::StationRepository,
        },
        error::{review::ReviewError, Error},
        model::{
            db::{AspectRatingModel, ReviewModel},
            worker::WorkerJob,
        },
        service::analysis::{AnalysisLocks, ReviewAnalyzer},
        worker::queue::WorkerQueue,
    },
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
    classifier: &'a SentimentClassifier,
    locks: &'a AnalysisLocks,
    queue: &'a WorkerQueue,
}

impl<'a> ReviewService<'a> {
    const MIN_RATING: i32 = 1;
    const MAX_RATING: i32 = 5;

    pub fn new(
        db: &'a DatabaseConnection,
        classifier: &'a SentimentClassifier,
        locks: &'a AnalysisLocks,
        queue: &'a WorkerQueue,
    ) -> Self {
        Self {
            db,
            classifier,
            locks,
            queue,
        }
    }

    /// Stores a review and analyzes it before returning.
    ///
    /// A failed analysis does not fail the submission: the error is logged, an
    /// `AnalyzeReview` job is queued to retry in the background and the review is returned
    /// without aspect ratings.
    ///
    /// # Returns
    /// - `Ok(ReviewDto)` - The stored review with its aspect ratings
    /// - `Err(ReviewError::EmptyText | RatingOutOfRange)` - Invalid submission
    /// - `Err(ReviewError::StationNotFound | CommuterNotFound)` - Unknown reference
    /// - `Err(Error::DbErr)` - Database error while storing the review
    pub async fn create(&self, payload: CreateReviewDto) -> Result<ReviewDto, Error> {
        if payload.text.trim().is_empty() {
            return Err(ReviewError::EmptyText.into());
        }
        if !(Self::MIN_RATING..=Self::MAX_RATING).contains(&payload.rating) {
            return Err(ReviewError::RatingOutOfRange(payload.rating).into());
        }

        if StationRepository::new(self.db)
            .get(payload.station_id)
            .await?
            .is_none()
        {
            return Err(ReviewError::StationNotFound(payload.station_id).into());
        }
        if CommuterRepository::new(self.db)
            .get(payload.commuter_id)
            .await?
            .is_none()
        {
            return Err(ReviewError::CommuterNotFound(payload.commuter_id).into());
        }

        let review_repo = ReviewRepository::new(self.db);
        let review = review_repo
            .create(
                payload.station_id,
                payload.commuter_id,
                payload.text,
                payload.rating,
            )
            .await?;

        let analysis = ReviewAnalyzer::new(self.db, self.classifier, self.locks)
            .analyze(&review)
            .await;

        if let Err(e) = analysis {
            tracing::error!("Failed to analyze review {}: {}", review.id, e);

            let job = WorkerJob::AnalyzeReview {
                review_id: review.id,
            };
            if let Err(e) = self.queue.push(job).await {
                tracing::error!("Failed to queue analysis of review {}: {}", review.id, e);
            }

            return Ok(review_dto(review, Vec::new()));
        }

        // Re-read so the overall sentiment set by the analysis is included
        let review = review_repo.get(review.id).await?.unwrap_or(review);
        let aspects = AspectRatingRepository::new(self.db)
            .get_by_review_id(review.id)
            .await?;

        Ok(review_dto(review, aspects))
    }

    /// Get a station's reviews with their aspect ratings, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<ReviewDto>)` - Reviews of the station, empty if it has none
    /// - `Err(ReviewError::StationNotFound)` - No station with this ID
    pub async fn get_station_reviews(&self, station_id: i32) -> Result<Vec<ReviewDto>, Error> {
        if StationRepository::new(self.db)
            .get(station_id)
            .await?
            .is_none()
        {
            return Err(ReviewError::StationNotFound(station_id).into());
        }

        let reviews = ReviewRepository::new(self.db)
            .get_by_station_id(station_id)
            .await?;
        let review_ids: Vec<i32> = reviews.iter().map(|r| r.id).collect();
        let rows = AspectRatingRepository::new(self.db)
            .get_by_review_ids(&review_ids)
            .await?;

        let mut by_review: HashMap<i32, Vec<AspectRatingModel>> = HashMap::new();
        for row in rows {
            by_review.entry(row.review_id).or_default().push(row);
        }

        Ok(reviews
            .into_iter()
            .map(|review| {
                let aspects = by_review.remove(&review.id).unwrap_or_default();
                review_dto(review, aspects)
            })
            .collect())
    }

    /// Deletes a review together with its aspect ratings.
    ///
    /// # Returns
    /// - `Ok(())` - Review deleted
    /// - `Err(ReviewError::ReviewNotFound)` - No review with this ID
    pub async fn delete(&self, review_id: i32) -> Result<(), Error> {
        // Wait for any in-flight analysis so it cannot write rows for a deleted review
        let _guard = self.locks.lock(review_id).await;

        let result = ReviewRepository::new(self.db).delete(review_id).await?;
        if result.rows_affected == 0 {
            return Err(ReviewError::ReviewNotFound(review_id).into());
        }

        Ok(())
    }
}

fn review_dto(review: ReviewModel, aspects: Vec<AspectRatingModel>) -> ReviewDto {
    ReviewDto {
        id: review.id,
        station_id: review.station_id,
        commuter_id: review.commuter_id,
        text: review.text,
        rating: review.rating,
        sentiment: review.sentiment,
        created_at: review.created_at,
        aspects: aspects
            .into_iter()
            .map(|row| AspectRatingDto {
                id: row.id,
                aspect: row.aspect,
                sentiment: row.sentiment,
            })
            .collect(),
    }
}
