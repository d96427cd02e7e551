//! Pretrained text-pair sentiment classifier.
//!
//! The heavy model is loaded once at startup into a [`SentimentModel`] implementation and
//! shared through [`SentimentClassifier`], which every analyzer clones cheaply. Inference
//! is blocking, so each call is moved onto tokio's blocking pool and bounded by a timeout.

pub mod labels;
pub mod onnx;

use std::{sync::Arc, time::Duration};

use crate::server::{
    absa::{aspect::Aspect, sentiment::Sentiment},
    error::classifier::ClassifierError,
};

pub use onnx::OnnxSentimentModel;

/// Inference backend conditioned on an aspect.
///
/// Implementations receive the review text and the aspect name as the two segments of a
/// sequence-pair input and return the raw label of the highest scoring class. The raw
/// label is normalized by the caller, implementations should not attempt to.
pub trait SentimentModel: Send + Sync + 'static {
    fn predict_label(&self, text: &str, aspect: &str) -> Result<String, ClassifierError>;
}

/// Shared handle to the process-wide sentiment model.
#[derive(Clone)]
pub struct SentimentClassifier {
    model: Arc<dyn SentimentModel>,
    timeout: Duration,
}

impl SentimentClassifier {
    /// Default upper bound for a single inference call.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a new classifier around an already loaded model.
    ///
    /// # Arguments
    /// - `model` - Loaded inference backend, shared by every clone of this classifier
    /// - `timeout` - Maximum time a single prediction may take before it is abandoned
    pub fn new(model: Arc<dyn SentimentModel>, timeout: Duration) -> Self {
        Self { model, timeout }
    }

    /// Wraps `model` using [`Self::DEFAULT_TIMEOUT`].
    pub fn from_model<M: SentimentModel>(model: M) -> Self {
        Self::new(Arc::new(model), Self::DEFAULT_TIMEOUT)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Predicts the sentiment `text` expresses about `aspect`.
    ///
    /// # Returns
    /// - `Ok(Sentiment)` - Normalized label of the highest scoring class
    /// - `Err(ClassifierError::Timeout)` - Inference did not finish within the timeout
    /// - `Err(ClassifierError::Task)` - The blocking inference task panicked or was cancelled
    /// - `Err(ClassifierError)` - Tokenization, model or label lookup failed
    pub async fn predict_sentiment(
        &self,
        text: &str,
        aspect: Aspect,
    ) -> Result<Sentiment, ClassifierError> {
        let model = Arc::clone(&self.model);
        let text = text.to_string();
        let aspect_name = aspect.name();

        // A timed out task keeps running on the blocking pool until the model returns,
        // its result is dropped.
        let task = tokio::task::spawn_blocking(move || model.predict_label(&text, aspect_name));

        match tokio::time::timeout(self.timeout, task).await {
            Ok(Ok(result)) => result.map(|label| Sentiment::from_label(&label)),
            Ok(Err(join_err)) => Err(ClassifierError::Task(join_err.to_string())),
            Err(_) => Err(ClassifierError::Timeout(self.timeout)),
        }
    }
}

/// Index of the largest score, the first one on ties.
///
/// Returns `None` for an empty slice.
pub(crate) fn argmax(scores: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (idx, &score) in scores.iter().enumerate() {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((idx, score)),
        }
    }

    best.map(|(idx, _)| idx)
}

#[cfg(test)]
pub(crate) mod stub;
