use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Review submission payload
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateReviewDto {
    pub station_id: i32,
    pub commuter_id: i32,
    pub text: String,
    /// Star rating from 1 to 5
    pub rating: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AspectRatingDto {
    pub id: i32,
    pub aspect: String,
    pub sentiment: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReviewDto {
    pub id: i32,
    pub station_id: i32,
    pub commuter_id: i32,
    pub text: String,
    pub rating: i32,
    /// Overall sentiment, absent until analysis has stored at least one aspect rating
    pub sentiment: Option<String>,
    pub created_at: NaiveDateTime,
    pub aspects: Vec<AspectRatingDto>,
}

/// Outcome of a background re-analysis request
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReanalyzeQueuedDto {
    pub station_id: i32,
    pub limit: Option<u64>,
}
