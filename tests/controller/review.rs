mod create_review {
    use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
    use stationpulse::{
        model::review::{CreateReviewDto, ReviewDto},
        server::controller::review::create_review,
    };
    use stationpulse_test_utils::prelude::*;

    use crate::util::{response::json_body, state::TestSetupExt, stub::FailingModel};

    fn payload(text: &str, rating: i32) -> CreateReviewDto {
        CreateReviewDto {
            station_id: 1,
            commuter_id: 1,
            text: text.to_string(),
            rating,
        }
    }

    async fn setup() -> Result<TestSetup, TestError> {
        TestBuilder::new()
            .with_review_tables()
            .with_station("Kashmere Gate")
            .with_commuter("alice")
            .build()
            .await
    }

    #[tokio::test]
    /// Expect 201 with one aspect rating per detected aspect
    async fn creates_and_analyzes_review() -> Result<(), TestError> {
        let test = setup().await?;

        let result = create_review(
            State(test.into_app_state()),
            Json(payload("Dirty floors, rude staff, long queue", 1)),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let review: ReviewDto = json_body(resp).await;
        let mut aspects: Vec<&str> = review.aspects.iter().map(|a| a.aspect.as_str()).collect();
        aspects.sort();
        assert_eq!(
            aspects,
            vec!["Cleanliness", "Crowd management", "Staff behavior"]
        );
        assert!(review.aspects.iter().all(|a| a.sentiment == "Negative"));
        assert_eq!(review.sentiment.as_deref(), Some("Negative"));

        Ok(())
    }

    #[tokio::test]
    /// Expect 201 with a General rating when no keyword matches
    async fn falls_back_to_general_aspect() -> Result<(), TestError> {
        let test = setup().await?;

        let result = create_review(State(test.into_app_state()), Json(payload("Lovely", 5))).await;

        assert!(result.is_ok());
        let review: ReviewDto = json_body(result.unwrap().into_response()).await;
        assert_eq!(review.aspects.len(), 1);
        assert_eq!(review.aspects[0].aspect, "General");
        assert_eq!(review.aspects[0].sentiment, "Positive");

        Ok(())
    }

    #[tokio::test]
    /// Expect 201 with Neutral ratings when the model fails
    async fn stores_review_when_model_fails() -> Result<(), TestError> {
        let test = setup().await?;

        let result = create_review(
            State(test.into_app_state_with_model(FailingModel)),
            Json(payload("Too crowded", 2)),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let review: ReviewDto = json_body(resp).await;
        assert_eq!(review.aspects.len(), 1);
        assert_eq!(review.aspects[0].aspect, "Crowd management");
        assert_eq!(review.aspects[0].sentiment, "Neutral");

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 for blank text
    async fn returns_bad_request_for_blank_text() -> Result<(), TestError> {
        let test = setup().await?;

        let result = create_review(State(test.into_app_state()), Json(payload("   ", 3))).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 for a rating outside 1 to 5
    async fn returns_bad_request_for_invalid_rating() -> Result<(), TestError> {
        let test = setup().await?;

        let result = create_review(State(test.into_app_state()), Json(payload("Clean", 6))).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 for an unknown commuter
    async fn returns_not_found_for_unknown_commuter() -> Result<(), TestError> {
        let test = setup().await?;
        let mut body = payload("Clean", 4);
        body.commuter_id = 99;

        let result = create_review(State(test.into_app_state()), Json(body)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod delete_review {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use sea_orm::EntityTrait;
    use stationpulse::server::controller::review::delete_review;
    use stationpulse_test_utils::prelude::*;

    use crate::util::state::TestSetupExt;

    #[tokio::test]
    /// Expect 204 and the aspect ratings removed with the review
    async fn deletes_review() -> Result<(), TestError> {
        let mut test = test_setup_with_review_tables!()?;
        let station = test.station().insert_station("Kashmere Gate").await?;
        let commuter = test.station().insert_commuter("alice").await?;
        let (review, _) = test
            .review()
            .insert_review_with_aspects(
                station.id,
                commuter.id,
                "Clean",
                &[("Cleanliness", "Positive")],
            )
            .await?;

        let result = delete_review(State(test.into_app_state()), Path(review.id)).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let remaining = entity::prelude::AspectRating::find().all(&test.db).await?;
        assert!(remaining.is_empty());

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 when the review does not exist
    async fn returns_not_found_for_unknown_review() -> Result<(), TestError> {
        let test = test_setup_with_review_tables!()?;

        let result = delete_review(State(test.into_app_state()), Path(5)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
