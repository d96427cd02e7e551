use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    absa::classifier::{OnnxSentimentModel, SentimentClassifier},
    config::Config,
    error::Error,
    service::analysis::AnalysisLocks,
    worker::{handler::WorkerJobHandler, Worker},
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Load the tokenizer, model and label artifacts from `MODEL_DIR`
///
/// Runs once at startup, a missing or unreadable artifact aborts the launch.
pub fn load_classifier(config: &Config) -> Result<SentimentClassifier, Error> {
    let model = OnnxSentimentModel::load(&config.model_dir, config.max_sequence_length)?;

    Ok(SentimentClassifier::new(
        Arc::new(model),
        config.inference_timeout,
    ))
}

/// Start the background worker pool for re-analysis jobs
pub async fn start_workers(
    config: &Config,
    db: DatabaseConnection,
    classifier: SentimentClassifier,
    locks: AnalysisLocks,
) -> Result<Worker, Error> {
    let handler = WorkerJobHandler::new(db, classifier, locks);
    let worker = Worker::new(config.analysis_workers, handler);

    worker.pool.start().await?;

    Ok(worker)
}
