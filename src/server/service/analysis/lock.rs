use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

type LockMap = HashMap<i32, Arc<AsyncMutex<()>>>;

/// Process-wide registry of per-review analysis locks.
///
/// Cloning shares the registry. Entries are removed once the last holder or waiter of a
/// review's lock is gone, so the map only grows with the number of reviews under analysis.
#[derive(Clone, Default)]
pub struct AnalysisLocks {
    inner: Arc<Mutex<LockMap>>,
}

/// Held while a review is being analyzed, released on drop.
pub struct AnalysisGuard {
    review_id: i32,
    locks: Arc<Mutex<LockMap>>,
    guard: Option<OwnedMutexGuard<()>>,
}

impl AnalysisLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits until no other analysis of `review_id` is in flight and claims it.
    pub async fn lock(&self, review_id: i32) -> AnalysisGuard {
        let review_lock = {
            let mut map = self.inner.lock().unwrap_or_else(|e| e.into_inner());
            Arc::clone(map.entry(review_id).or_default())
        };

        let guard = review_lock.lock_owned().await;

        AnalysisGuard {
            review_id,
            locks: Arc::clone(&self.inner),
            guard: Some(guard),
        }
    }

    /// Number of reviews with an analysis in flight or waiting.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Drop for AnalysisGuard {
    fn drop(&mut self) {
        let mut map = self.locks.lock().unwrap_or_else(|e| e.into_inner());

        // Release first so the count below only sees the map's reference and waiters
        self.guard.take();

        if let Some(review_lock) = map.get(&self.review_id) {
            if Arc::strong_count(review_lock) == 1 {
                map.remove(&self.review_id);
            }
        }
    }
}
