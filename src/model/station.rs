use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StationDto {
    pub id: i32,
    pub name: String,
    pub line: String,
    pub location: String,
}

/// Aggregated sentiment for one aspect across a station's reviews
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AspectStatsDto {
    /// Dominant sentiment: Positive, Negative or Neutral
    pub sentiment: String,
    /// Share of ratings with the dominant sentiment, 0 to 100
    pub percentage: u8,
    /// Trend of the aspect, currently always "stable"
    pub trend: String,
    pub positive_percentage: u8,
    pub negative_percentage: u8,
    pub neutral_percentage: u8,
    /// Number of aspect ratings the percentages are derived from
    pub total: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StationStatsDto {
    pub station_id: i32,
    /// Mean star rating rounded to one decimal, 0 when the station has no reviews
    pub overall_rating: f64,
    pub total_reviews: u64,
    /// Review count per star rating, keys "1" to "5"
    pub review_distribution: BTreeMap<String, u64>,
    /// Stats keyed by aspect name, always all nine aspects
    pub aspects: BTreeMap<String, AspectStatsDto>,
}
