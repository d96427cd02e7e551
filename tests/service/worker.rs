use std::time::Duration;

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use stationpulse::server::{model::worker::WorkerJob, service::station::StationService};
use stationpulse_test_utils::prelude::*;

use crate::util::state::TestSetupExt;

#[tokio::test]
/// Expect a queued station job to be processed by the running pool
async fn reanalysis_request_is_processed() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .with_station("Kashmere Gate")
        .with_commuter("alice")
        .with_review(1, 1, "Too crowded")
        .with_review(1, 1, "Clean platforms")
        .build()
        .await?;
    let state = test.into_app_state();
    state.worker.pool.start().await.unwrap();

    StationService::new(&state.db)
        .request_reanalysis(&state.worker.queue, 1, None)
        .await
        .unwrap();

    let mut rows = Vec::new();
    for _ in 0..100 {
        rows = entity::prelude::AspectRating::find().all(&test.db).await?;
        if rows.len() == 3 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    state.worker.pool.stop().await.unwrap();

    assert_eq!(rows.len(), 3);

    Ok(())
}

#[tokio::test]
/// Expect an analyze job to set the review's overall sentiment
async fn analyze_job_sets_sentiment() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .with_station("Kashmere Gate")
        .with_commuter("alice")
        .with_review(1, 1, "The staff were rude")
        .build()
        .await?;
    let state = test.into_app_state();
    state.worker.pool.start().await.unwrap();

    state
        .worker
        .queue
        .push(WorkerJob::AnalyzeReview { review_id: 1 })
        .await
        .unwrap();

    let mut sentiment = None;
    for _ in 0..100 {
        sentiment = entity::prelude::Review::find()
            .filter(entity::review::Column::Id.eq(1))
            .one(&test.db)
            .await?
            .and_then(|review| review.sentiment);
        if sentiment.is_some() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    state.worker.pool.stop().await.unwrap();

    assert_eq!(sentiment.as_deref(), Some("Negative"));

    Ok(())
}
