//! Closed set of station-quality aspects that reviews are judged against.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Station-quality dimension a review can discuss.
///
/// The nine canonical aspects are the only keys ever produced by station aggregation.
/// [`Aspect::General`] is the sentinel assigned when keyword detection finds nothing; it
/// is persisted like any other aspect but never reported in aggregated statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Aspect {
    Connectivity,
    Infrastructure,
    GeneralSafety,
    CrowdManagement,
    Ticketing,
    WomensSafety,
    Frequency,
    StaffBehavior,
    Cleanliness,
    General,
}

impl Aspect {
    /// The nine canonical aspects, in aggregation output order.
    pub const CANONICAL: [Aspect; 9] = [
        Aspect::Connectivity,
        Aspect::Infrastructure,
        Aspect::GeneralSafety,
        Aspect::CrowdManagement,
        Aspect::Ticketing,
        Aspect::WomensSafety,
        Aspect::Frequency,
        Aspect::StaffBehavior,
        Aspect::Cleanliness,
    ];

    /// Display name, also used as the stored `aspect_rating.aspect` value and as the
    /// second segment of the classifier input.
    pub fn name(&self) -> &'static str {
        match self {
            Aspect::Connectivity => "Metro Station Connectivity",
            Aspect::Infrastructure => "Metro station infrastructure",
            Aspect::GeneralSafety => "General Safety",
            Aspect::CrowdManagement => "Crowd management",
            Aspect::Ticketing => "Ticketing system",
            Aspect::WomensSafety => "Women's Safety",
            Aspect::Frequency => "Metro frequency",
            Aspect::StaffBehavior => "Staff behavior",
            Aspect::Cleanliness => "Cleanliness",
            Aspect::General => "General",
        }
    }

    pub fn is_canonical(&self) -> bool {
        !matches!(self, Aspect::General)
    }

    /// Stored names of an earlier, coarser aspect set and their canonical replacement.
    pub const LEGACY_NAMES: [(&'static str, Aspect); 4] = [
        ("Facilities", Aspect::Infrastructure),
        ("Safety", Aspect::GeneralSafety),
        ("Crowd", Aspect::CrowdManagement),
        ("Service", Aspect::Ticketing),
    ];

    /// Canonical aspect replacing a legacy stored name, `None` for any other name.
    pub fn from_legacy_name(name: &str) -> Option<Aspect> {
        Self::LEGACY_NAMES
            .iter()
            .find(|(legacy, _)| *legacy == name)
            .map(|(_, aspect)| *aspect)
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a stored aspect name matches no known aspect.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown aspect name: {0:?}")]
pub struct UnknownAspect(pub String);

impl FromStr for Aspect {
    type Err = UnknownAspect;

    /// Parses an exact aspect name as written by the analyzer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Aspect::CANONICAL
            .iter()
            .chain(std::iter::once(&Aspect::General))
            .find(|aspect| aspect.name() == s)
            .copied()
            .ok_or_else(|| UnknownAspect(s.to_string()))
    }
}
