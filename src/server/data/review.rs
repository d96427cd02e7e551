use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, QueryFilter, QueryOrder, QuerySelect, UpdateResult,
};

use crate::server::model::db::ReviewModel;

pub struct ReviewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewRepository<'a, C> {
    /// Creates a new instance of [`ReviewRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new, unanalyzed review
    pub async fn create(
        &self,
        station_id: i32,
        commuter_id: i32,
        text: String,
        rating: i32,
    ) -> Result<ReviewModel, DbErr> {
        let review = entity::review::ActiveModel {
            station_id: ActiveValue::Set(station_id),
            commuter_id: ActiveValue::Set(commuter_id),
            text: ActiveValue::Set(text),
            rating: ActiveValue::Set(rating),
            sentiment: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        review.insert(self.db).await
    }

    pub async fn get(&self, review_id: i32) -> Result<Option<ReviewModel>, DbErr> {
        entity::prelude::Review::find_by_id(review_id)
            .one(self.db)
            .await
    }

    /// Get all reviews of a station, newest first
    pub async fn get_by_station_id(&self, station_id: i32) -> Result<Vec<ReviewModel>, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::StationId.eq(station_id))
            .order_by_desc(entity::review::Column::CreatedAt)
            .order_by_desc(entity::review::Column::Id)
            .all(self.db)
            .await
    }

    /// Get review IDs newest first, optionally restricted to one station and capped at `limit`
    pub async fn get_ids_newest_first(
        &self,
        station_id: Option<i32>,
        limit: Option<u64>,
    ) -> Result<Vec<i32>, DbErr> {
        let mut query = entity::prelude::Review::find()
            .select_only()
            .column(entity::review::Column::Id)
            .order_by_desc(entity::review::Column::CreatedAt)
            .order_by_desc(entity::review::Column::Id);

        if let Some(station_id) = station_id {
            query = query.filter(entity::review::Column::StationId.eq(station_id));
        }

        query.limit(limit).into_tuple::<i32>().all(self.db).await
    }

    /// Get the star rating of every review of a station
    pub async fn get_ratings_by_station_id(&self, station_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Review::find()
            .select_only()
            .column(entity::review::Column::Rating)
            .filter(entity::review::Column::StationId.eq(station_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Set the overall sentiment of a review
    ///
    /// Returns OK regardless of the review existing, check [`UpdateResult::rows_affected`]
    /// to confirm the update.
    pub async fn update_sentiment(
        &self,
        review_id: i32,
        sentiment: &str,
    ) -> Result<UpdateResult, DbErr> {
        entity::prelude::Review::update_many()
            .col_expr(
                entity::review::Column::Sentiment,
                Expr::value(sentiment.to_string()),
            )
            .filter(entity::review::Column::Id.eq(review_id))
            .exec(self.db)
            .await
    }

    /// Deletes a review, cascading to its aspect ratings
    ///
    /// Returns OK regardless of the review existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, review_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Review::delete_by_id(review_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use stationpulse_test_utils::prelude::*;

        use crate::server::data::review::ReviewRepository;

        /// Expect success when creating a review for an existing station and commuter
        #[tokio::test]
        async fn creates_review() -> Result<(), TestError> {
            let mut test = test_setup_with_review_tables!()?;
            let station = test.station().insert_station("Kashmere Gate").await?;
            let commuter = test.station().insert_commuter("alice").await?;

            let review_repo = ReviewRepository::new(&test.db);
            let review = review_repo
                .create(station.id, commuter.id, "Clean platforms".to_string(), 4)
                .await?;

            assert_eq!(review.station_id, station.id);
            assert_eq!(review.rating, 4);
            assert!(review.sentiment.is_none());

            Ok(())
        }

        /// Expect Error when the station does not exist
        #[tokio::test]
        async fn fails_for_nonexistent_station() -> Result<(), TestError> {
            let mut test = test_setup_with_review_tables!()?;
            let commuter = test.station().insert_commuter("alice").await?;

            let nonexistent_station_id = 1;
            let review_repo = ReviewRepository::new(&test.db);
            let result = review_repo
                .create(nonexistent_station_id, commuter.id, "Text".to_string(), 3)
                .await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_by_station_id {
        use chrono::{Duration, Utc};
        use stationpulse_test_utils::prelude::*;

        use crate::server::data::review::ReviewRepository;

        /// Expect only the station's reviews, newest first
        #[tokio::test]
        async fn returns_station_reviews_newest_first() -> Result<(), TestError> {
            let mut test = test_setup_with_review_tables!()?;
            let station = test.station().insert_station("Kashmere Gate").await?;
            let other_station = test.station().insert_station("Rajiv Chowk").await?;
            let commuter = test.station().insert_commuter("alice").await?;
            let now = Utc::now().naive_utc();
            let older = test
                .review()
                .insert_review_at(station.id, commuter.id, "older", now - Duration::hours(1))
                .await?;
            let newer = test
                .review()
                .insert_review_at(station.id, commuter.id, "newer", now)
                .await?;
            test.review()
                .insert_review(other_station.id, commuter.id, "elsewhere")
                .await?;

            let review_repo = ReviewRepository::new(&test.db);
            let reviews = review_repo.get_by_station_id(station.id).await?;

            let ids: Vec<i32> = reviews.iter().map(|r| r.id).collect();
            assert_eq!(ids, vec![newer.id, older.id]);

            Ok(())
        }
    }

    mod get_ids_newest_first {
        use chrono::{Duration, Utc};
        use stationpulse_test_utils::prelude::*;

        use crate::server::data::review::ReviewRepository;

        /// Expect the limit to keep the most recent reviews
        #[tokio::test]
        async fn applies_limit_to_newest() -> Result<(), TestError> {
            let mut test = test_setup_with_review_tables!()?;
            let station = test.station().insert_station("Kashmere Gate").await?;
            let commuter = test.station().insert_commuter("alice").await?;
            let now = Utc::now().naive_utc();
            let mut ids = Vec::new();
            for hours in [3, 2, 1] {
                let review = test
                    .review()
                    .insert_review_at(station.id, commuter.id, "text", now - Duration::hours(hours))
                    .await?;
                ids.push(review.id);
            }

            let review_repo = ReviewRepository::new(&test.db);
            let result = review_repo.get_ids_newest_first(None, Some(2)).await?;

            assert_eq!(result, vec![ids[2], ids[1]]);

            Ok(())
        }

        /// Expect reviews of other stations to be excluded when filtering by station
        #[tokio::test]
        async fn filters_by_station() -> Result<(), TestError> {
            let mut test = test_setup_with_review_tables!()?;
            let station = test.station().insert_station("Kashmere Gate").await?;
            let other_station = test.station().insert_station("Rajiv Chowk").await?;
            let commuter = test.station().insert_commuter("alice").await?;
            let review = test
                .review()
                .insert_review(station.id, commuter.id, "mine")
                .await?;
            test.review()
                .insert_review(other_station.id, commuter.id, "theirs")
                .await?;

            let review_repo = ReviewRepository::new(&test.db);
            let result = review_repo
                .get_ids_newest_first(Some(station.id), None)
                .await?;

            assert_eq!(result, vec![review.id]);

            Ok(())
        }
    }

    mod update_sentiment {
        use stationpulse_test_utils::prelude::*;

        use crate::server::data::review::ReviewRepository;

        /// Expect the stored overall sentiment to change
        #[tokio::test]
        async fn updates_existing_review() -> Result<(), TestError> {
            let mut test = test_setup_with_review_tables!()?;
            let (_, _, review) = test.review().insert_mock_review("Clean").await?;

            let review_repo = ReviewRepository::new(&test.db);
            let result = review_repo.update_sentiment(review.id, "Positive").await?;
            let updated = review_repo.get(review.id).await?;

            assert_eq!(result.rows_affected, 1);
            assert_eq!(
                updated.and_then(|r| r.sentiment),
                Some("Positive".to_string())
            );

            Ok(())
        }

        /// Expect no rows affected for a review that does not exist
        #[tokio::test]
        async fn affects_nothing_for_nonexistent_review() -> Result<(), TestError> {
            let test = test_setup_with_review_tables!()?;

            let review_repo = ReviewRepository::new(&test.db);
            let result = review_repo.update_sentiment(1, "Positive").await?;

            assert_eq!(result.rows_affected, 0);

            Ok(())
        }
    }

    mod delete {
        use sea_orm::EntityTrait;
        use stationpulse_test_utils::prelude::*;

        use crate::server::data::review::ReviewRepository;

        /// Expect the review and its aspect ratings to be removed
        #[tokio::test]
        async fn deletes_review_and_aspect_ratings() -> Result<(), TestError> {
            let mut test = test_setup_with_review_tables!()?;
            let (_, _, review) = test.review().insert_mock_review("Dirty").await?;
            test.review()
                .insert_aspect_rating(review.id, "Cleanliness", "Negative")
                .await?;

            let review_repo = ReviewRepository::new(&test.db);
            let result = review_repo.delete(review.id).await?;

            assert_eq!(result.rows_affected, 1);
            let remaining = entity::prelude::AspectRating::find().all(&test.db).await?;
            assert!(remaining.is_empty());

            Ok(())
        }

        /// Expect no rows affected when deleting a review that does not exist
        #[tokio::test]
        async fn affects_nothing_for_nonexistent_review() -> Result<(), TestError> {
            let test = test_setup_with_review_tables!()?;

            let review_repo = ReviewRepository::new(&test.db);
            let result = review_repo.delete(1).await?;

            assert_eq!(result.rows_affected, 0);

            Ok(())
        }
    }
}
