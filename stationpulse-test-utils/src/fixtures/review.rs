use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_RATING, TEST_STATION_NAME, TEST_USERNAME},
    error::TestError,
    model::{AspectRatingModel, CommuterModel, ReviewModel, StationModel},
    TestSetup,
};

impl TestSetup {
    pub fn review<'a>(&'a mut self) -> ReviewFixtures<'a> {
        ReviewFixtures { setup: self }
    }
}

pub struct ReviewFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> ReviewFixtures<'a> {
    /// Insert an unanalyzed review created now
    pub async fn insert_review(
        &self,
        station_id: i32,
        commuter_id: i32,
        text: &str,
    ) -> Result<ReviewModel, TestError> {
        self.insert_review_at(station_id, commuter_id, text, Utc::now().naive_utc())
            .await
    }

    pub async fn insert_review_at(
        &self,
        station_id: i32,
        commuter_id: i32,
        text: &str,
        created_at: NaiveDateTime,
    ) -> Result<ReviewModel, TestError> {
        Ok(
            entity::prelude::Review::insert(entity::review::ActiveModel {
                station_id: ActiveValue::Set(station_id),
                commuter_id: ActiveValue::Set(commuter_id),
                text: ActiveValue::Set(text.to_string()),
                rating: ActiveValue::Set(TEST_RATING),
                sentiment: ActiveValue::Set(None),
                created_at: ActiveValue::Set(created_at),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_aspect_rating(
        &self,
        review_id: i32,
        aspect: &str,
        sentiment: &str,
    ) -> Result<AspectRatingModel, TestError> {
        Ok(
            entity::prelude::AspectRating::insert(entity::aspect_rating::ActiveModel {
                review_id: ActiveValue::Set(review_id),
                aspect: ActiveValue::Set(aspect.to_string()),
                sentiment: ActiveValue::Set(sentiment.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a review together with already-analyzed aspect rows
    ///
    /// Each `(aspect, sentiment)` pair becomes one aspect rating row, stored verbatim.
    pub async fn insert_review_with_aspects(
        &self,
        station_id: i32,
        commuter_id: i32,
        text: &str,
        aspects: &[(&str, &str)],
    ) -> Result<(ReviewModel, Vec<AspectRatingModel>), TestError> {
        let review = self.insert_review(station_id, commuter_id, text).await?;

        let mut rows = Vec::with_capacity(aspects.len());
        for (aspect, sentiment) in aspects {
            rows.push(
                self.insert_aspect_rating(review.id, aspect, sentiment)
                    .await?,
            );
        }

        Ok((review, rows))
    }

    /// Insert the default station and commuter followed by a review of the station
    pub async fn insert_mock_review(
        &mut self,
        text: &str,
    ) -> Result<(StationModel, CommuterModel, ReviewModel), TestError> {
        let station = self.setup.station().insert_station(TEST_STATION_NAME).await?;
        let commuter = self.setup.station().insert_commuter(TEST_USERNAME).await?;
        let review = self.insert_review(station.id, commuter.id, text).await?;

        Ok((station, commuter, review))
    }
}
