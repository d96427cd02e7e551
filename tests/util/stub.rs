//! Inference backends standing in for the ONNX model.

use stationpulse::server::{
    absa::classifier::SentimentModel, error::classifier::ClassifierError,
};

/// Labels a review Negative when it contains one of `negative_words`, Positive otherwise.
pub struct WordListModel {
    pub negative_words: &'static [&'static str],
}

impl SentimentModel for WordListModel {
    fn predict_label(&self, text: &str, _aspect: &str) -> Result<String, ClassifierError> {
        let text = text.to_lowercase();
        let negative = self.negative_words.iter().any(|word| text.contains(word));

        Ok(if negative { "Negative" } else { "Positive" }.to_string())
    }
}

/// Default model for tests: "rude", "dirty", "crowded" and "late" read as Negative.
pub fn word_list_model() -> WordListModel {
    WordListModel {
        negative_words: &["rude", "dirty", "crowded", "late"],
    }
}

/// Fails every prediction.
pub struct FailingModel;

impl SentimentModel for FailingModel {
    fn predict_label(&self, _text: &str, _aspect: &str) -> Result<String, ClassifierError> {
        Err(ClassifierError::Model("model unavailable".to_string()))
    }
}
