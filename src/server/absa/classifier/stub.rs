//! Stand-in inference backends for unit tests of code built on the classifier.

use std::{
    collections::{HashMap, HashSet},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use crate::server::{
    absa::classifier::{SentimentClassifier, SentimentModel},
    error::classifier::ClassifierError,
};

/// Answers with a fixed label per aspect name, `default` for any other aspect.
pub(crate) struct ScriptedModel {
    labels: HashMap<&'static str, &'static str>,
    failing: HashSet<&'static str>,
    default: &'static str,
    calls: Arc<AtomicUsize>,
}

impl ScriptedModel {
    pub(crate) fn new(default: &'static str) -> Self {
        Self {
            labels: HashMap::new(),
            failing: HashSet::new(),
            default,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn with(mut self, aspect: &'static str, label: &'static str) -> Self {
        self.labels.insert(aspect, label);
        self
    }

    /// Fails every prediction for `aspect`.
    pub(crate) fn failing(mut self, aspect: &'static str) -> Self {
        self.failing.insert(aspect);
        self
    }

    /// Wraps the model in a classifier, returning the shared call counter alongside it.
    pub(crate) fn into_classifier(self) -> (SentimentClassifier, Arc<AtomicUsize>) {
        let calls = Arc::clone(&self.calls);
        (SentimentClassifier::from_model(self), calls)
    }
}

impl SentimentModel for ScriptedModel {
    fn predict_label(&self, _text: &str, aspect: &str) -> Result<String, ClassifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(aspect) {
            return Err(ClassifierError::Model(format!("no prediction for {}", aspect)));
        }
        Ok(self.labels.get(aspect).unwrap_or(&self.default).to_string())
    }
}

/// Fails every prediction.
pub(crate) struct FailingModel;

impl SentimentModel for FailingModel {
    fn predict_label(&self, _text: &str, _aspect: &str) -> Result<String, ClassifierError> {
        Err(ClassifierError::Model("inference backend unavailable".to_string()))
    }
}
