use sea_orm::DatabaseConnection;

use crate::server::{
    absa::classifier::SentimentClassifier, service::analysis::AnalysisLocks, worker::Worker,
};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub classifier: SentimentClassifier,
    pub locks: AnalysisLocks,
    pub worker: Worker,
}
