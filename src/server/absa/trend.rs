//! Per-aspect trend reported alongside aggregated station statistics.

use serde::{Deserialize, Serialize};

use super::{aspect::Aspect, sentiment::Sentiment};

/// Direction an aspect's sentiment is heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Declining => "declining",
            Self::Stable => "stable",
        }
    }
}

/// Computes the trend of one aspect from its stored ratings.
///
/// `ratings` holds every normalized sentiment recorded for `aspect` at the station,
/// newest review first.
pub trait TrendCalculator: Send + Sync {
    fn trend(&self, aspect: Aspect, ratings: &[Sentiment]) -> Trend;
}

/// Reports every aspect as [`Trend::Stable`].
///
/// No temporal trend model exists yet; this keeps the `trend` field of the stats
/// response populated until one is plugged in.
#[derive(Debug, Clone, Copy, Default)]
pub struct StableTrend;

impl TrendCalculator for StableTrend {
    fn trend(&self, _aspect: Aspect, _ratings: &[Sentiment]) -> Trend {
        Trend::Stable
    }
}
