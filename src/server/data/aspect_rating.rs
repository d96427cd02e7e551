use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, UpdateResult,
};

use crate::server::{
    absa::{aspect::Aspect, sentiment::Sentiment},
    model::db::AspectRatingModel,
};

pub struct AspectRatingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AspectRatingRepository<'a, C> {
    /// Creates a new instance of [`AspectRatingRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts one row per (aspect, sentiment) pair for a review
    pub async fn create_many(
        &self,
        review_id: i32,
        ratings: &[(Aspect, Sentiment)],
    ) -> Result<Vec<AspectRatingModel>, DbErr> {
        if ratings.is_empty() {
            return Ok(Vec::new());
        }

        let ratings = ratings
            .iter()
            .map(|(aspect, sentiment)| entity::aspect_rating::ActiveModel {
                review_id: ActiveValue::Set(review_id),
                aspect: ActiveValue::Set(aspect.name().to_string()),
                sentiment: ActiveValue::Set(sentiment.as_str().to_string()),
                ..Default::default()
            });

        entity::prelude::AspectRating::insert_many(ratings)
            .exec_with_returning(self.db)
            .await
    }

    /// Deletes every aspect rating of a review
    pub async fn delete_by_review_id(&self, review_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::AspectRating::delete_many()
            .filter(entity::aspect_rating::Column::ReviewId.eq(review_id))
            .exec(self.db)
            .await
    }

    /// Rewrites every row stored under aspect name `from` to `to`
    pub async fn rename_aspect(&self, from: &str, to: &str) -> Result<UpdateResult, DbErr> {
        entity::prelude::AspectRating::update_many()
            .col_expr(
                entity::aspect_rating::Column::Aspect,
                Expr::value(to.to_string()),
            )
            .filter(entity::aspect_rating::Column::Aspect.eq(from))
            .exec(self.db)
            .await
    }

    pub async fn get_by_review_id(&self, review_id: i32) -> Result<Vec<AspectRatingModel>, DbErr> {
        entity::prelude::AspectRating::find()
            .filter(entity::aspect_rating::Column::ReviewId.eq(review_id))
            .order_by_asc(entity::aspect_rating::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_review_ids(
        &self,
        review_ids: &[i32],
    ) -> Result<Vec<AspectRatingModel>, DbErr> {
        if review_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::AspectRating::find()
            .filter(entity::aspect_rating::Column::ReviewId.is_in(review_ids.iter().copied()))
            .order_by_asc(entity::aspect_rating::Column::Id)
            .all(self.db)
            .await
    }

    /// Get every aspect rating belonging to a review of the station
    pub async fn get_by_station_id(
        &self,
        station_id: i32,
    ) -> Result<Vec<AspectRatingModel>, DbErr> {
        entity::prelude::AspectRating::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::aspect_rating::Relation::Review.def(),
            )
            .filter(entity::review::Column::StationId.eq(station_id))
            .order_by_asc(entity::aspect_rating::Column::Id)
            .all(self.db)
            .await
    }
}
