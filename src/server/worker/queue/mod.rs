//! In-process job queue feeding the worker pool.
//!
//! Jobs are handed over through an unbounded tokio channel. The queue owns both ends so
//! any clone can push, and dispatchers take turns receiving through a shared lock.
//! Closing drops the sender, which never contends with a dispatcher parked in `pop`.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, RwLock,
};

use tokio::sync::{mpsc, Mutex};

use crate::server::{error::worker::WorkerError, model::worker::WorkerJob};

#[derive(Clone)]
pub struct WorkerQueue {
    inner: Arc<WorkerQueueRef>,
}

struct WorkerQueueRef {
    sender: RwLock<Option<mpsc::UnboundedSender<WorkerJob>>>,
    receiver: Mutex<mpsc::UnboundedReceiver<WorkerJob>>,
    pending: AtomicUsize,
}

impl WorkerQueue {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        Self {
            inner: Arc::new(WorkerQueueRef {
                sender: RwLock::new(Some(sender)),
                receiver: Mutex::new(receiver),
                pending: AtomicUsize::new(0),
            }),
        }
    }

    /// Enqueues a job.
    ///
    /// # Returns
    /// - `Ok(())` - Job accepted
    /// - `Err(WorkerError::QueueClosed)` - Queue was closed, the job was dropped
    pub async fn push(&self, job: WorkerJob) -> Result<(), WorkerError> {
        let sender = self.inner.sender.read().unwrap_or_else(|e| e.into_inner());
        let Some(sender) = sender.as_ref() else {
            return Err(WorkerError::QueueClosed(job.to_string()));
        };

        // Count before sending so a fast dispatcher never decrements below zero
        self.inner.pending.fetch_add(1, Ordering::SeqCst);

        if let Err(e) = sender.send(job) {
            self.inner.pending.fetch_sub(1, Ordering::SeqCst);
            return Err(WorkerError::QueueClosed(e.0.to_string()));
        }

        tracing::debug!("Queued job ({} pending)", self.len());

        Ok(())
    }

    /// Waits for the next job.
    ///
    /// Returns `None` once the queue is closed and drained. Cancel safe: dropping the
    /// future before it resolves never loses a job.
    pub async fn pop(&self) -> Option<WorkerJob> {
        let job = self.inner.receiver.lock().await.recv().await;

        if job.is_some() {
            self.inner.pending.fetch_sub(1, Ordering::SeqCst);
        }

        job
    }

    /// Stops accepting new jobs. Jobs already queued can still be popped.
    pub fn close(&self) {
        self.inner
            .sender
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .take();
    }

    /// Number of jobs waiting for a dispatcher.
    pub fn len(&self) -> usize {
        self.inner.pending.load(Ordering::SeqCst)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for WorkerQueue {
    fn default() -> Self {
        Self::new()
    }
}
