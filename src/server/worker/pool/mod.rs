//! Worker pool for processing background jobs with concurrency control.
//!
//! The pool runs dispatcher tasks that receive jobs from the [`WorkerQueue`] and spawn a
//! task per job. A semaphore bounds how many jobs run at once, and every job is cancelled
//! once it exceeds the configured timeout.

mod config;

pub use config::WorkerPoolConfig;

use std::sync::Arc;

use tokio::sync::{watch, OwnedSemaphorePermit, RwLock, Semaphore};
use tokio::task::JoinHandle;

use crate::server::{
    error::{worker::WorkerError, Error},
    model::worker::WorkerJob,
    worker::{handler::WorkerJobHandler, queue::WorkerQueue},
};

/// Worker pool for processing jobs from the WorkerQueue.
#[derive(Clone)]
pub struct WorkerPool {
    inner: Arc<WorkerPoolRef>,
}

/// Internal worker pool state, wrapped in an Arc by `WorkerPool` for cheap cloning.
pub struct WorkerPoolRef {
    config: WorkerPoolConfig,
    queue: WorkerQueue,
    handler: Arc<WorkerJobHandler>,
    semaphore: Arc<Semaphore>,
    shutdown: watch::Sender<bool>,
    dispatcher_handles: RwLock<Vec<JoinHandle<()>>>,
}

impl WorkerPool {
    /// Creates a new worker pool.
    ///
    /// The pool is created in a stopped state and must be started with `start()`.
    ///
    /// # Arguments
    /// - `config` - Configuration including max concurrent jobs and dispatcher settings
    /// - `queue` - Job queue to receive jobs from
    /// - `handler` - Job handler for executing different job types
    pub fn new(config: WorkerPoolConfig, queue: WorkerQueue, handler: WorkerJobHandler) -> Self {
        let semaphore = Arc::new(Semaphore::new(config.max_concurrent_jobs));
        let (shutdown, _) = watch::channel(false);

        Self {
            inner: Arc::new(WorkerPoolRef {
                config,
                queue,
                handler: Arc::new(handler),
                semaphore,
                shutdown,
                dispatcher_handles: RwLock::new(Vec::new()),
            }),
        }
    }

    /// Starts the worker pool.
    ///
    /// Spawns the configured number of dispatcher tasks and returns immediately.
    /// Calling it when already running logs a warning and returns Ok. A pool that has
    /// been stopped cannot be restarted.
    ///
    /// # Returns
    /// - `Ok(())` - Pool started successfully (or already running)
    /// - `Err(Error::InternalError)` - Pool was already stopped
    pub async fn start(&self) -> Result<(), Error> {
        let mut handles = self.inner.dispatcher_handles.write().await;

        if !handles.is_empty() {
            tracing::warn!("Worker pool is already running");
            return Ok(());
        }

        if *self.inner.shutdown.borrow() {
            return Err(Error::InternalError(
                "Worker pool cannot be restarted after stop()".to_string(),
            ));
        }

        tracing::info!(
            "Starting worker pool with {} dispatcher(s) (max {} concurrent jobs)",
            self.inner.config.dispatcher_count,
            self.inner.config.max_concurrent_jobs
        );

        for id in 0..self.inner.config.dispatcher_count {
            handles.push(self.spawn_dispatcher(id));
        }

        Ok(())
    }

    /// Spawns a single dispatcher task.
    ///
    /// The dispatcher receives jobs until shutdown is signalled or the queue is closed.
    fn spawn_dispatcher(&self, id: usize) -> JoinHandle<()> {
        let pool = Arc::clone(&self.inner);
        let mut shutdown = self.inner.shutdown.subscribe();

        tokio::spawn(async move {
            tracing::debug!("Dispatcher {} started", id);

            loop {
                tokio::select! {
                    // Shutdown takes priority over new jobs
                    biased;

                    _ = async { shutdown.wait_for(|stopped| *stopped).await.map(|_| ()) } => {
                        tracing::debug!("Dispatcher {} received shutdown signal", id);
                        break;
                    }

                    job = pool.queue.pop() => match job {
                        Some(job) => Self::dispatch(id, &pool, job).await,
                        None => {
                            tracing::debug!("Dispatcher {} found the queue closed", id);
                            break;
                        }
                    }
                }
            }

            tracing::debug!("Dispatcher {} stopped", id);
        })
    }

    /// Waits for a free slot and spawns the job.
    ///
    /// Returns the job to the queue if the semaphore was closed by `stop()`.
    async fn dispatch(dispatcher_id: usize, pool: &Arc<WorkerPoolRef>, job: WorkerJob) {
        match Arc::clone(&pool.semaphore).acquire_owned().await {
            Ok(permit) => {
                let handler = Arc::clone(&pool.handler);
                let timeout = pool.config.job_timeout();

                tokio::spawn(async move {
                    Self::execute_job(job, handler, timeout, permit).await;
                });
            }
            Err(_) => {
                tracing::debug!(
                    "Dispatcher {} semaphore closed, returning job to queue: {}",
                    dispatcher_id,
                    job
                );
                let _ = pool.queue.push(job).await;
            }
        }
    }

    /// Executes a job with timeout, holding the permit until it finishes.
    async fn execute_job(
        job: WorkerJob,
        handler: Arc<WorkerJobHandler>,
        timeout: std::time::Duration,
        _permit: OwnedSemaphorePermit,
    ) {
        match tokio::time::timeout(timeout, handler.handle(&job)).await {
            Ok(Ok(())) => {
                tracing::debug!("Job completed: {}", job);
            }
            Ok(Err(e)) => {
                tracing::error!("Job failed: {}, error: {:?}", job, e);
            }
            Err(_) => {
                let err = WorkerError::JobTimeout {
                    job: job.to_string(),
                    seconds: timeout.as_secs(),
                };
                tracing::error!("{}", err);
            }
        }
    }

    /// Stops the worker pool gracefully.
    ///
    /// Closes the semaphore so no new job starts, signals the dispatchers and waits for
    /// them up to the configured shutdown timeout. Jobs already running continue to
    /// completion; jobs still queued are left unprocessed.
    pub async fn stop(&self) -> Result<(), Error> {
        if !self.is_running().await {
            tracing::debug!("Worker pool is already stopped");
            return Ok(());
        }

        tracing::info!("Shutting down worker pool...");

        self.inner.semaphore.close();
        self.inner.shutdown.send_replace(true);

        let mut handles = self.inner.dispatcher_handles.write().await;
        let dispatcher_count = handles.len();

        for (i, handle) in handles.drain(..).enumerate() {
            match tokio::time::timeout(self.inner.config.shutdown_timeout(), handle).await {
                Ok(Ok(())) => {
                    tracing::debug!("Dispatcher {} stopped cleanly", i);
                }
                Ok(Err(e)) => {
                    tracing::error!("Dispatcher {} panicked: {:?}", i, e);
                }
                Err(_) => {
                    tracing::warn!("Dispatcher {} did not stop within timeout", i);
                }
            }
        }

        tracing::info!(
            "Worker pool shut down ({} dispatchers stopped, {} queued job(s) dropped)",
            dispatcher_count,
            self.inner.queue.len()
        );

        Ok(())
    }

    pub async fn is_running(&self) -> bool {
        !self.inner.dispatcher_handles.read().await.is_empty()
    }

    pub async fn dispatcher_count(&self) -> usize {
        self.inner.dispatcher_handles.read().await.len()
    }

    /// Gets the number of available semaphore permits.
    ///
    /// A value of 0 means the pool is at capacity.
    pub fn available_permits(&self) -> usize {
        self.inner.semaphore.available_permits()
    }

    pub fn max_concurrent_jobs(&self) -> usize {
        self.inner.config.max_concurrent_jobs
    }

    /// Number of jobs currently executing.
    pub fn active_job_count(&self) -> usize {
        self.inner
            .config
            .max_concurrent_jobs
            .saturating_sub(self.inner.semaphore.available_permits())
    }
}
