//! Builds [`AppState`] on top of a test database.

use stationpulse::server::{
    absa::classifier::{SentimentClassifier, SentimentModel},
    model::app::AppState,
    service::analysis::AnalysisLocks,
    worker::{handler::WorkerJobHandler, Worker},
};
use stationpulse_test_utils::TestSetup;

use crate::util::stub::word_list_model;

/// Extension trait for TestSetup to create AppState
pub trait TestSetupExt {
    /// State backed by [`word_list_model`], with a worker that is not started
    fn into_app_state(&self) -> AppState;

    fn into_app_state_with_model<M: SentimentModel>(&self, model: M) -> AppState;
}

impl TestSetupExt for TestSetup {
    fn into_app_state(&self) -> AppState {
        self.into_app_state_with_model(word_list_model())
    }

    fn into_app_state_with_model<M: SentimentModel>(&self, model: M) -> AppState {
        let classifier = SentimentClassifier::from_model(model);
        let locks = AnalysisLocks::new();
        let handler = WorkerJobHandler::new(self.db.clone(), classifier.clone(), locks.clone());

        AppState {
            db: self.db.clone(),
            classifier,
            locks,
            worker: Worker::new(1, handler),
        }
    }
}
