pub mod handler;
pub mod pool;
pub mod queue;

pub use pool::WorkerPool;
pub use queue::WorkerQueue;

use crate::server::worker::{handler::WorkerJobHandler, pool::WorkerPoolConfig};

#[derive(Clone)]
pub struct Worker {
    pub queue: WorkerQueue,
    pub pool: WorkerPool,
}

impl Worker {
    pub fn new(max_concurrent_jobs: usize, handler: WorkerJobHandler) -> Self {
        Self::with_config(WorkerPoolConfig::new(max_concurrent_jobs), handler)
    }

    pub fn with_config(config: WorkerPoolConfig, handler: WorkerJobHandler) -> Self {
        let queue = WorkerQueue::new();
        let pool = WorkerPool::new(config, queue.clone(), handler);

        Self { queue, pool }
    }
}
