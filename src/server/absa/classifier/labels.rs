//! Label list shipped next to the model weights.

use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::server::error::classifier::ClassifierError;

/// Parses a label file, one label per record in the first column.
///
/// The exported file starts with a numeric header row, so only non-empty, purely
/// alphabetic labels are kept; the remaining labels are in class index order.
///
/// # Returns
/// - `Ok(Vec<String>)` - Labels ordered by class index
/// - `Err(ClassifierError::Labels)` - The contents are not valid CSV
pub fn parse_labels(contents: &str) -> Result<Vec<String>, ClassifierError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(contents.as_bytes());

    let mut labels = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ClassifierError::Labels(e.to_string()))?;
        let label = record.get(0).unwrap_or_default().trim();

        if !label.is_empty() && label.chars().all(char::is_alphabetic) {
            labels.push(label.to_string());
        }
    }

    Ok(labels)
}

/// Reads and parses the label file at `path`.
///
/// # Returns
/// - `Ok(Vec<String>)` - Labels ordered by class index
/// - `Err(ClassifierError::Labels)` - File unreadable, malformed or without any label
pub fn load_labels(path: &Path) -> Result<Vec<String>, ClassifierError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        ClassifierError::Labels(format!("failed to read {}: {}", path.display(), e))
    })?;

    let labels = parse_labels(&contents)?;
    if labels.is_empty() {
        return Err(ClassifierError::Labels(format!(
            "label file {} contains no labels",
            path.display()
        )));
    }

    Ok(labels)
}
