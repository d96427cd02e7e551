use std::time::Duration;

/// Configuration for the worker pool
#[derive(Debug, Clone)]
pub struct WorkerPoolConfig {
    /// Maximum concurrent jobs that can be processed simultaneously.
    ///
    /// Every job holds a database connection while it writes, and analysis jobs also
    /// queue for the shared classifier, so keep this well below the connection pool size.
    pub max_concurrent_jobs: usize,

    /// Number of dispatcher tasks receiving from the queue.
    ///
    /// Automatically calculated as 1 dispatcher per 40 concurrent jobs (minimum 1).
    pub dispatcher_count: usize,

    /// Maximum time a job can run before being cancelled (seconds).
    ///
    /// Station sweeps analyze many reviews in one job, hence the generous default.
    pub job_timeout_seconds: u64,

    /// Maximum time to wait for a dispatcher to shutdown (seconds).
    /// If a dispatcher doesn't stop within this time, a warning is logged.
    pub shutdown_timeout_seconds: u64,
}

impl WorkerPoolConfig {
    /// Create a new configuration with default timeouts
    ///
    /// # Arguments
    /// * `max_concurrent_jobs` - Maximum concurrent jobs
    pub fn new(max_concurrent_jobs: usize) -> Self {
        let max_concurrent_jobs = max_concurrent_jobs.max(1);
        // Ceiling division, no more than 40 jobs per dispatcher
        let dispatcher_count = max_concurrent_jobs.div_ceil(40).max(1);

        Self {
            max_concurrent_jobs,
            dispatcher_count,
            job_timeout_seconds: 10 * 60,
            shutdown_timeout_seconds: 5,
        }
    }

    /// Get job timeout as Duration
    pub fn job_timeout(&self) -> Duration {
        Duration::from_secs(self.job_timeout_seconds)
    }

    /// Get shutdown timeout as Duration
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_seconds)
    }
}

impl Default for WorkerPoolConfig {
    fn default() -> Self {
        Self::new(4)
    }
}
