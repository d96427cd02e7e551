//! ONNX Runtime backend for the sentiment model.
//!
//! Expects a model directory containing `tokenizer.json`, `model.onnx` and `labels.csv`.
//! The session is behind a mutex: ONNX Runtime sessions need exclusive access to run, so
//! inference calls are serialized per process while the weights are shared read-only.

use std::{path::Path, sync::Mutex};

use ort::{session::Session, value::Tensor};
use tokenizers::{Tokenizer, TruncationParams};

use crate::server::{
    absa::classifier::{argmax, labels::load_labels, SentimentModel},
    error::classifier::ClassifierError,
};

pub static TOKENIZER_FILE: &str = "tokenizer.json";
pub static MODEL_FILE: &str = "model.onnx";
pub static LABELS_FILE: &str = "labels.csv";

/// Default token budget for the (text, aspect) pair.
pub const DEFAULT_MAX_SEQUENCE_LENGTH: usize = 128;

pub struct OnnxSentimentModel {
    tokenizer: Tokenizer,
    session: Mutex<Session>,
    labels: Vec<String>,
    uses_token_type_ids: bool,
}

impl OnnxSentimentModel {
    /// Loads tokenizer, model weights and labels from `model_dir`.
    ///
    /// # Arguments
    /// - `model_dir` - Directory holding the exported model artifacts
    /// - `max_sequence_length` - Pair inputs longer than this are truncated
    ///
    /// # Returns
    /// - `Ok(OnnxSentimentModel)` - Model ready for inference
    /// - `Err(ClassifierError)` - An artifact is missing or could not be loaded
    pub fn load(model_dir: &Path, max_sequence_length: usize) -> Result<Self, ClassifierError> {
        let mut tokenizer = Tokenizer::from_file(model_dir.join(TOKENIZER_FILE))
            .map_err(|e| ClassifierError::Tokenizer(e.to_string()))?;
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: max_sequence_length,
                ..Default::default()
            }))
            .map_err(|e| ClassifierError::Tokenizer(e.to_string()))?;
        tokenizer.with_padding(None);

        let session = Session::builder()
            .map_err(|e| ClassifierError::Model(e.to_string()))?
            .commit_from_file(model_dir.join(MODEL_FILE))
            .map_err(|e| ClassifierError::Model(e.to_string()))?;

        let uses_token_type_ids = session
            .inputs
            .iter()
            .any(|input| input.name == "token_type_ids");

        let labels = load_labels(&model_dir.join(LABELS_FILE))?;

        tracing::info!(
            "Loaded sentiment model from {} ({} labels, max sequence length {})",
            model_dir.display(),
            labels.len(),
            max_sequence_length
        );

        Ok(Self {
            tokenizer,
            session: Mutex::new(session),
            labels,
            uses_token_type_ids,
        })
    }

    fn class_scores(&self, text: &str, aspect: &str) -> Result<Vec<f32>, ClassifierError> {
        let encoding = self
            .tokenizer
            .encode((text, aspect), true)
            .map_err(|e| ClassifierError::Tokenizer(e.to_string()))?;

        let seq_len = encoding.get_ids().len();
        let to_i64 = |values: &[u32]| values.iter().map(|&v| i64::from(v)).collect::<Vec<_>>();

        let input_ids = Tensor::from_array(([1usize, seq_len], to_i64(encoding.get_ids())))
            .map_err(|e| ClassifierError::Model(e.to_string()))?;
        let attention_mask =
            Tensor::from_array(([1usize, seq_len], to_i64(encoding.get_attention_mask())))
                .map_err(|e| ClassifierError::Model(e.to_string()))?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| ClassifierError::Model("model session lock poisoned".to_string()))?;

        let outputs = if self.uses_token_type_ids {
            let token_type_ids =
                Tensor::from_array(([1usize, seq_len], to_i64(encoding.get_type_ids())))
                    .map_err(|e| ClassifierError::Model(e.to_string()))?;

            session.run(ort::inputs![
                "input_ids" => input_ids,
                "attention_mask" => attention_mask,
                "token_type_ids" => token_type_ids,
            ])
        } else {
            session.run(ort::inputs![
                "input_ids" => input_ids,
                "attention_mask" => attention_mask,
            ])
        }
        .map_err(|e| ClassifierError::Model(e.to_string()))?;

        let (_, logits) = outputs[0]
            .try_extract_tensor::<f32>()
            .map_err(|e| ClassifierError::Model(e.to_string()))?;

        Ok(logits.to_vec())
    }
}

impl SentimentModel for OnnxSentimentModel {
    fn predict_label(&self, text: &str, aspect: &str) -> Result<String, ClassifierError> {
        let scores = self.class_scores(text, aspect)?;
        let index = argmax(&scores)
            .ok_or_else(|| ClassifierError::Model("model returned no class scores".to_string()))?;

        self.labels
            .get(index)
            .cloned()
            .ok_or(ClassifierError::LabelIndex {
                index,
                labels: self.labels.len(),
            })
    }
}
