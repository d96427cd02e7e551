//! Sentiment classifier error types.
//!
//! Every variant is recoverable from the analyzer's point of view: a failed prediction
//! degrades the affected aspect to Neutral instead of aborting the review's analysis.
//! Only loading errors at startup are fatal.

use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifierError {
    /// Tokenizer could not be loaded or failed to encode the input pair.
    #[error("Tokenizer error: {0}")]
    Tokenizer(String),

    /// Model weights could not be loaded or inference failed.
    #[error("Model inference error: {0}")]
    Model(String),

    /// Label file missing, unreadable or empty.
    #[error("Failed to load labels: {0}")]
    Labels(String),

    /// The model predicted a class index with no entry in the label file.
    #[error("Predicted class index {index} has no label ({labels} labels loaded)")]
    LabelIndex { index: usize, labels: usize },

    /// Inference exceeded the configured timeout.
    #[error("Inference timed out after {0:?}")]
    Timeout(Duration),

    /// The blocking inference task panicked or was cancelled.
    #[error("Inference task failed: {0}")]
    Task(String),
}
