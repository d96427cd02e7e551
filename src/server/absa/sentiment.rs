//! Sentiment labels and normalization of raw classifier output.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentiment polarity assigned to one aspect of a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Fixed iteration order, also the tie-break order when picking a dominant sentiment.
    pub const ORDER: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }

    /// Normalizes a raw label into a sentiment.
    ///
    /// The label vocabulary shipped with the model is not trusted: an empty label or the
    /// literal `"0"` maps to [`Sentiment::Neutral`], everything else is trimmed and
    /// capitalized (`"POSITIVE "` becomes `"Positive"`) and anything outside the three known
    /// labels also falls back to [`Sentiment::Neutral`].
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        if trimmed.is_empty() || trimmed == "0" {
            return Sentiment::Neutral;
        }

        match capitalize(trimmed).as_str() {
            "Positive" => Sentiment::Positive,
            "Negative" => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }

    /// Returns the sentiment with the highest count, ties resolved by [`Sentiment::ORDER`].
    ///
    /// `counts` is indexed in [`Sentiment::ORDER`] order.
    pub fn dominant(counts: &[u64; 3]) -> Self {
        let mut best = 0;
        for idx in 1..counts.len() {
            if counts[idx] > counts[best] {
                best = idx;
            }
        }

        Sentiment::ORDER[best]
    }

    /// Position of this sentiment in [`Sentiment::ORDER`].
    pub fn index(&self) -> usize {
        match self {
            Sentiment::Positive => 0,
            Sentiment::Negative => 1,
            Sentiment::Neutral => 2,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
