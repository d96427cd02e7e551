use sea_orm::EntityTrait;
use stationpulse::server::{
    absa::classifier::SentimentClassifier,
    service::{
        analysis::AnalysisLocks,
        backfill::{BackfillService, BackfillSummary},
        station::StationService,
    },
};
use stationpulse_test_utils::prelude::*;

use crate::util::stub::word_list_model;

#[tokio::test]
/// Expect unanalyzed reviews of every station to gain aspect ratings
async fn analyzes_reviews_of_all_stations() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .with_station("Kashmere Gate")
        .with_station("Rajiv Chowk")
        .with_commuter("alice")
        .with_review(1, 1, "Dirty floors and rude staff")
        .with_review(2, 1, "Trains come every 3 minutes")
        .build()
        .await?;
    let classifier = SentimentClassifier::from_model(word_list_model());
    let locks = AnalysisLocks::new();

    let summary = BackfillService::new(&test.db, &classifier, &locks)
        .reanalyze(None, None)
        .await
        .unwrap();

    assert_eq!(
        summary,
        BackfillSummary {
            processed: 2,
            errors: 0
        }
    );

    let rows = entity::prelude::AspectRating::find().all(&test.db).await?;
    assert_eq!(rows.len(), 3);

    let stats = StationService::new(&test.db).get_stats(2).await.unwrap();
    assert_eq!(stats.aspects["Metro frequency"].sentiment, "Positive");
    assert_eq!(stats.aspects["Metro frequency"].total, 1);

    Ok(())
}

#[tokio::test]
/// Expect a second sweep to replace rather than duplicate aspect ratings
async fn repeated_sweep_is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .with_station("Kashmere Gate")
        .with_commuter("alice")
        .with_review(1, 1, "Dirty floors and rude staff")
        .build()
        .await?;
    let classifier = SentimentClassifier::from_model(word_list_model());
    let locks = AnalysisLocks::new();
    let backfill = BackfillService::new(&test.db, &classifier, &locks);

    backfill.reanalyze(Some(1), None).await.unwrap();
    backfill.reanalyze(Some(1), None).await.unwrap();

    let rows = entity::prelude::AspectRating::find().all(&test.db).await?;
    assert_eq!(rows.len(), 2);

    Ok(())
}
