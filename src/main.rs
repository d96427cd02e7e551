use stationpulse::server::{
    config::Config,
    error::Error,
    model::app::AppState,
    router,
    service::{analysis::AnalysisLocks, backfill::BackfillService},
    startup,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Server exited with error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let db = startup::connect_to_database(&config).await?;
    let classifier = startup::load_classifier(&config)?;
    let locks = AnalysisLocks::new();

    let renamed = BackfillService::new(&db, &classifier, &locks)
        .standardize_aspect_names()
        .await?;
    if renamed > 0 {
        tracing::info!("Renamed {} aspect rating(s) stored under legacy names", renamed);
    }

    let worker =
        startup::start_workers(&config, db.clone(), classifier.clone(), locks.clone()).await?;

    let app = router::routes().with_state(AppState {
        db,
        classifier,
        locks,
        worker: worker.clone(),
    });

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("Starting server on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped, waiting for background jobs");

    worker.pool.stop().await?;
    worker.queue.close();

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
