mod get_stations {
    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use stationpulse::{model::station::StationDto, server::controller::station::get_stations};
    use stationpulse_test_utils::prelude::*;

    use crate::util::{response::json_body, state::TestSetupExt};

    #[tokio::test]
    /// Expect 200 with every station
    async fn returns_all_stations() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_review_tables()
            .with_station("Kashmere Gate")
            .with_station("Rajiv Chowk")
            .build()
            .await?;

        let result = get_stations(State(test.into_app_state())).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let stations: Vec<StationDto> = json_body(resp).await;
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].name, "Kashmere Gate");

        Ok(())
    }

    #[tokio::test]
    /// Expect 500 when the tables are missing
    async fn returns_error_on_database_failure() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let result = get_stations(State(test.into_app_state())).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        Ok(())
    }
}

mod get_station_stats {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use stationpulse::{
        model::{api::ErrorDto, station::StationStatsDto},
        server::controller::station::get_station_stats,
    };
    use stationpulse_test_utils::prelude::*;

    use crate::util::{response::json_body, state::TestSetupExt};

    #[tokio::test]
    /// Expect 200 with the aggregated aspects of stored reviews
    async fn returns_station_stats() -> Result<(), TestError> {
        let mut test = test_setup_with_review_tables!()?;
        let station = test.station().insert_station("Kashmere Gate").await?;
        let commuter = test.station().insert_commuter("alice").await?;
        test.review()
            .insert_review_with_aspects(
                station.id,
                commuter.id,
                "Rude staff",
                &[("Staff behavior", "Negative")],
            )
            .await?;

        let result = get_station_stats(State(test.into_app_state()), Path(station.id)).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let stats: StationStatsDto = json_body(resp).await;
        assert_eq!(stats.total_reviews, 1);
        assert_eq!(stats.aspects.len(), 9);
        assert_eq!(stats.aspects["Staff behavior"].sentiment, "Negative");
        assert_eq!(stats.aspects["Staff behavior"].percentage, 100);

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 for an unknown station
    async fn returns_not_found_for_unknown_station() -> Result<(), TestError> {
        let test = test_setup_with_review_tables!()?;

        let result = get_station_stats(State(test.into_app_state()), Path(404)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: ErrorDto = json_body(resp).await;
        assert_eq!(body.error, "Station ID 404 not found");

        Ok(())
    }
}

mod get_station_reviews {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use stationpulse::{model::review::ReviewDto, server::controller::station::get_station_reviews};
    use stationpulse_test_utils::prelude::*;

    use crate::util::{response::json_body, state::TestSetupExt};

    #[tokio::test]
    /// Expect 200 with the reviews and their aspect ratings
    async fn returns_reviews_with_aspects() -> Result<(), TestError> {
        let mut test = test_setup_with_review_tables!()?;
        let station = test.station().insert_station("Kashmere Gate").await?;
        let commuter = test.station().insert_commuter("alice").await?;
        test.review()
            .insert_review_with_aspects(
                station.id,
                commuter.id,
                "Dirty floors and rude staff",
                &[("Staff behavior", "Negative"), ("Cleanliness", "Negative")],
            )
            .await?;

        let result = get_station_reviews(State(test.into_app_state()), Path(station.id)).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let reviews: Vec<ReviewDto> = json_body(resp).await;
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].aspects.len(), 2);

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 for an unknown station
    async fn returns_not_found_for_unknown_station() -> Result<(), TestError> {
        let test = test_setup_with_review_tables!()?;

        let result = get_station_reviews(State(test.into_app_state()), Path(1)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod reanalyze_station {
    use axum::{
        extract::{Path, Query, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use stationpulse::{
        model::review::ReanalyzeQueuedDto,
        server::{
            controller::station::{reanalyze_station, ReanalyzeParams},
            model::worker::WorkerJob,
        },
    };
    use stationpulse_test_utils::prelude::*;

    use crate::util::{response::json_body, state::TestSetupExt};

    #[tokio::test]
    /// Expect 202 and a queued station job
    async fn queues_reanalysis() -> Result<(), TestError> {
        let mut test = test_setup_with_review_tables!()?;
        let station = test.station().insert_station("Kashmere Gate").await?;
        let state = test.into_app_state();

        let result = reanalyze_station(
            State(state.clone()),
            Path(station.id),
            Query(ReanalyzeParams { limit: Some(10) }),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::ACCEPTED);

        let queued: ReanalyzeQueuedDto = json_body(resp).await;
        assert_eq!(queued.station_id, station.id);
        assert_eq!(queued.limit, Some(10));
        assert_eq!(
            state.worker.queue.pop().await,
            Some(WorkerJob::ReanalyzeStation {
                station_id: station.id,
                limit: Some(10),
            })
        );

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 for an unknown station
    async fn returns_not_found_for_unknown_station() -> Result<(), TestError> {
        let test = test_setup_with_review_tables!()?;

        let result = reanalyze_station(
            State(test.into_app_state()),
            Path(8),
            Query(ReanalyzeParams { limit: None }),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    #[tokio::test]
    /// Expect 503 once the queue stopped accepting jobs
    async fn returns_unavailable_when_queue_closed() -> Result<(), TestError> {
        let mut test = test_setup_with_review_tables!()?;
        let station = test.station().insert_station("Kashmere Gate").await?;
        let state = test.into_app_state();
        state.worker.queue.close();

        let result = reanalyze_station(
            State(state),
            Path(station.id),
            Query(ReanalyzeParams { limit: None }),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        Ok(())
    }
}
