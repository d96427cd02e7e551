//! Per-station aspect statistics computed from stored aspect ratings.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    absa::{
        aspect::Aspect,
        sentiment::Sentiment,
        trend::{StableTrend, Trend, TrendCalculator},
    },
    data::aspect_rating::AspectRatingRepository,
    error::Error,
    model::db::AspectRatingModel,
};

/// Aggregated sentiment for one canonical aspect.
#[derive(Debug, Clone, PartialEq)]
pub struct AspectStats {
    pub aspect: Aspect,
    pub sentiment: Sentiment,
    /// floor(dominant count * 100 / total), 0 without ratings
    pub percentage: u8,
    pub trend: Trend,
    pub positive_percentage: u8,
    pub negative_percentage: u8,
    /// Remainder bucket, so the three percentages sum to 100 whenever `total > 0`
    pub neutral_percentage: u8,
    pub total: u64,
}

/// Stats for all nine canonical aspects, in [`Aspect::CANONICAL`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct StationAspectStats {
    pub aspects: Vec<AspectStats>,
}

impl StationAspectStats {
    pub fn get(&self, aspect: Aspect) -> Option<&AspectStats> {
        self.aspects.iter().find(|stats| stats.aspect == aspect)
    }
}

pub struct StationAggregator<'a> {
    db: &'a DatabaseConnection,
    trend: &'a dyn TrendCalculator,
}

impl<'a> StationAggregator<'a> {
    /// Creates an aggregator reporting every trend as stable
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            trend: &StableTrend,
        }
    }

    pub fn with_trend(db: &'a DatabaseConnection, trend: &'a dyn TrendCalculator) -> Self {
        Self { db, trend }
    }

    /// Aggregates the aspect ratings of every review of a station.
    ///
    /// A station without reviews, or one that does not exist, yields all nine aspects
    /// at 0% / Neutral.
    pub async fn aggregate(&self, station_id: i32) -> Result<StationAspectStats, Error> {
        let rows = AspectRatingRepository::new(self.db)
            .get_by_station_id(station_id)
            .await?;

        Ok(summarize(&rows, self.trend))
    }

    /// Aggregates the aspect ratings of an explicit set of reviews.
    pub async fn aggregate_reviews(&self, review_ids: &[i32]) -> Result<StationAspectStats, Error> {
        let rows = AspectRatingRepository::new(self.db)
            .get_by_review_ids(review_ids)
            .await?;

        Ok(summarize(&rows, self.trend))
    }
}

/// Counts rows by (aspect, sentiment) and derives the stats of each canonical aspect.
///
/// Rows naming a non-canonical aspect are skipped; unparsable stored sentiments count
/// as Neutral.
pub fn summarize(rows: &[AspectRatingModel], trend: &dyn TrendCalculator) -> StationAspectStats {
    // Trend input is ordered newest review first; review IDs grow with creation time
    let mut rows: Vec<&AspectRatingModel> = rows.iter().collect();
    rows.sort_by(|a, b| b.review_id.cmp(&a.review_id).then(a.id.cmp(&b.id)));

    let mut ratings: HashMap<Aspect, Vec<Sentiment>> = HashMap::new();
    for row in rows {
        let aspect = match row.aspect.parse::<Aspect>() {
            Ok(aspect) if aspect.is_canonical() => aspect,
            _ => continue,
        };

        ratings
            .entry(aspect)
            .or_default()
            .push(Sentiment::from_label(&row.sentiment));
    }

    let aspects = Aspect::CANONICAL
        .iter()
        .map(|&aspect| {
            let sentiments = ratings.get(&aspect).map(Vec::as_slice).unwrap_or(&[]);
            aspect_stats(aspect, sentiments, trend)
        })
        .collect();

    StationAspectStats { aspects }
}

fn aspect_stats(aspect: Aspect, sentiments: &[Sentiment], trend: &dyn TrendCalculator) -> AspectStats {
    let mut counts = [0u64; 3];
    for sentiment in sentiments {
        counts[sentiment.index()] += 1;
    }

    let total = sentiments.len() as u64;
    let sentiment = Sentiment::dominant(&counts);
    let trend = trend.trend(aspect, sentiments);

    if total == 0 {
        return AspectStats {
            aspect,
            sentiment: Sentiment::Neutral,
            percentage: 0,
            trend,
            positive_percentage: 0,
            negative_percentage: 0,
            neutral_percentage: 0,
            total,
        };
    }

    let positive_percentage = floor_percentage(counts[Sentiment::Positive.index()], total);
    let negative_percentage = floor_percentage(counts[Sentiment::Negative.index()], total);

    AspectStats {
        aspect,
        sentiment,
        percentage: floor_percentage(counts[sentiment.index()], total),
        trend,
        positive_percentage,
        negative_percentage,
        neutral_percentage: 100 - positive_percentage - negative_percentage,
        total,
    }
}

fn floor_percentage(count: u64, total: u64) -> u8 {
    (count * 100 / total) as u8
}
