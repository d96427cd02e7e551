use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        review::ReanalyzeQueuedDto,
        station::{AspectStatsDto, StationDto, StationStatsDto},
    },
    server::{
        data::{review::ReviewRepository, station::StationRepository},
        error::{review::ReviewError, Error},
        model::worker::WorkerJob,
        service::aggregate::{AspectStats, StationAggregator},
        worker::queue::WorkerQueue,
    },
};

pub struct StationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StationService<'a> {
    /// Creates a new instance of [`StationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<StationDto>, Error> {
        let stations = StationRepository::new(self.db).get_all().await?;

        Ok(stations
            .into_iter()
            .map(|station| StationDto {
                id: station.id,
                name: station.name,
                line: station.line,
                location: station.location,
            })
            .collect())
    }

    /// Builds the statistics shown on a station's page.
    ///
    /// # Returns
    /// - `Ok(StationStatsDto)` - Rating summary plus stats for all nine aspects
    /// - `Err(ReviewError::StationNotFound)` - No station with this ID
    /// - `Err(Error::DbErr)` - Database error
    pub async fn get_stats(&self, station_id: i32) -> Result<StationStatsDto, Error> {
        if StationRepository::new(self.db)
            .get(station_id)
            .await?
            .is_none()
        {
            return Err(ReviewError::StationNotFound(station_id).into());
        }

        let ratings = ReviewRepository::new(self.db)
            .get_ratings_by_station_id(station_id)
            .await?;
        let stats = StationAggregator::new(self.db).aggregate(station_id).await?;

        let aspects = stats
            .aspects
            .iter()
            .map(|stats| (stats.aspect.name().to_string(), aspect_stats_dto(stats)))
            .collect();

        Ok(StationStatsDto {
            station_id,
            overall_rating: overall_rating(&ratings),
            total_reviews: ratings.len() as u64,
            review_distribution: review_distribution(&ratings),
            aspects,
        })
    }

    /// Queues a background re-analysis of a station's reviews.
    ///
    /// # Returns
    /// - `Ok(ReanalyzeQueuedDto)` - Job queued
    /// - `Err(ReviewError::StationNotFound)` - No station with this ID
    /// - `Err(WorkerError::QueueClosed)` - Workers are shutting down
    pub async fn request_reanalysis(
        &self,
        queue: &WorkerQueue,
        station_id: i32,
        limit: Option<u64>,
    ) -> Result<ReanalyzeQueuedDto, Error> {
        if StationRepository::new(self.db)
            .get(station_id)
            .await?
            .is_none()
        {
            return Err(ReviewError::StationNotFound(station_id).into());
        }

        queue
            .push(WorkerJob::ReanalyzeStation { station_id, limit })
            .await?;

        tracing::info!("Queued re-analysis of station {}", station_id);

        Ok(ReanalyzeQueuedDto { station_id, limit })
    }
}

/// Mean star rating rounded to one decimal, 0 without ratings
fn overall_rating(ratings: &[i32]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }

    let sum: i64 = ratings.iter().map(|&r| r as i64).sum();
    let mean = sum as f64 / ratings.len() as f64;

    (mean * 10.0).round() / 10.0
}

/// Review count per star, every key from "1" to "5" present
fn review_distribution(ratings: &[i32]) -> BTreeMap<String, u64> {
    let mut distribution: BTreeMap<String, u64> =
        (1..=5).map(|star: i32| (star.to_string(), 0)).collect();

    for rating in ratings {
        if let Some(count) = distribution.get_mut(&rating.to_string()) {
            *count += 1;
        }
    }

    distribution
}

fn aspect_stats_dto(stats: &AspectStats) -> AspectStatsDto {
    AspectStatsDto {
        sentiment: stats.sentiment.as_str().to_string(),
        percentage: stats.percentage,
        trend: stats.trend.as_str().to_string(),
        positive_percentage: stats.positive_percentage,
        negative_percentage: stats.negative_percentage,
        neutral_percentage: stats.neutral_percentage,
        total: stats.total,
    }
}
