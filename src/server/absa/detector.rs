//! Keyword-based aspect detection.
//!
//! Each canonical aspect owns a curated list of lowercase keywords. An aspect is detected
//! when any of its keywords occurs as a substring of the lowercased review text, so short
//! keywords such as `"ac"` also hit inside longer words. That recall-over-precision trade
//! is part of the detection contract and is kept as is.

use super::aspect::Aspect;

/// Keyword vocabulary per canonical aspect, in detection output order.
pub static ASPECT_KEYWORDS: [(Aspect, &[&str]); 9] = [
    (
        Aspect::Connectivity,
        &[
            "connectivity", "connect", "connected", "connecting", "link", "linked", "linking",
            "reach", "accessible", "interchange", "transfer", "junction", "hub", "integration",
            "integrated", "access", "connection", "seamless", "direct", "cross", "bridge", "mesh",
            "grid", "unified", "intersect", "intersection",
        ],
    ),
    (
        Aspect::Infrastructure,
        &[
            "infrastructure", "facility", "facilities", "platform", "lift", "elevator",
            "escalator", "washroom", "toilet", "restroom", "parking", "seating", "waiting",
            "amenities", "shelter", "canopy", "lighting", "ventilation", "ac",
            "air-conditioning", "cctv", "security", "accessibility", "wheelchair", "disabled",
            "braille", "tactile", "kiosk", "display", "announcement", "retail", "atm", "water",
            "charging", "design", "architecture", "modern", "upgrade", "maintenance",
        ],
    ),
    (
        Aspect::GeneralSafety,
        &[
            "safety", "safe", "secure", "security", "accident", "hazard", "danger", "dangerous",
            "risk", "risky", "protection", "emergency", "fire", "surveillance", "monitoring",
            "cctv", "patrol", "guard", "equipment", "protocol", "measures", "guidelines", "audit",
            "inspection", "alert", "warning", "panic", "exit", "response", "management",
            "prevention", "awareness", "training",
        ],
    ),
    (
        Aspect::CrowdManagement,
        &[
            "crowd", "crowded", "overcrowded", "packed", "congestion", "congested", "density",
            "rush", "peak", "management", "control", "flow", "handling", "dispersal",
            "distribution", "monitoring", "bottleneck", "choke", "surge", "pressure",
            "jam-packed", "sardine", "capacity", "load", "analytics", "counting", "optimization",
            "dynamics", "stampede", "mass", "boarding", "behavior", "behaviour", "commuter",
            "commuters", "passenger", "passengers", "queue", "discipline", "etiquette",
            "pushing",
        ],
    ),
    (
        Aspect::Ticketing,
        &[
            "ticketing", "ticket", "tickets", "machine", "token", "tokens", "automated", "system",
            "validation", "collection", "gate", "gates", "barrier", "barriers", "turnstile",
            "entry", "exit", "pass", "recharge", "top-up", "vending", "counter", "booth", "kiosk",
        ],
    ),
    (
        Aspect::WomensSafety,
        &[
            "women", "woman", "female", "ladies", "girl", "girls", "safety", "harassment",
            "unsafe", "security", "molestation", "assault", "abuse", "threat", "intimidation",
            "stalking", "catcalling", "inappropriate", "uncomfortable", "vulnerable",
            "protection", "safe", "travel", "commute", "commuting", "coach", "compartment",
            "reserved", "dedicated",
        ],
    ),
    (
        Aspect::Frequency,
        &[
            "frequency", "frequent", "interval", "gap", "time", "timing", "timings", "schedule",
            "scheduled", "arrival", "departure", "wait", "waiting", "delay", "punctual",
            "on-time", "regular", "irregular", "consistent", "inconsistent", "headway",
            "service", "operation", "running", "timetable", "minutes", "seconds", "hours",
            "peak", "off-peak", "non-peak",
        ],
    ),
    (
        Aspect::StaffBehavior,
        &[
            "staff", "employee", "employees", "personnel", "worker", "workers", "conductor",
            "driver", "security", "guard", "officer", "behavior", "behaviour", "attitude",
            "helpful", "rude", "polite", "courteous", "friendly", "unfriendly", "assistance",
            "help", "support", "service", "customer", "professional", "unprofessional", "conduct",
            "manner", "response", "interaction",
        ],
    ),
    (
        Aspect::Cleanliness,
        &[
            "clean", "cleanliness", "dirty", "filthy", "garbage", "trash", "litter", "waste",
            "hygiene", "hygienic", "unhygienic", "dusty", "dust", "tidy", "untidy", "neat",
            "mess", "messy", "sanitation", "sanitized", "maintained", "maintenance",
            "housekeeping", "cleaning", "sweeping", "mopping", "spotless", "pristine", "fresh",
            "stale", "odor", "smell",
        ],
    ),
];

/// Returns the aspects mentioned in `text`, never empty.
///
/// Aspects are returned in [`ASPECT_KEYWORDS`] order. Text matching no keyword, including
/// blank text, yields the single sentinel [`Aspect::General`].
pub fn detect_aspects(text: &str) -> Vec<Aspect> {
    let text_lower = text.to_lowercase();

    let mut matched: Vec<Aspect> = ASPECT_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|kw| text_lower.contains(kw)))
        .map(|(aspect, _)| *aspect)
        .collect();

    if matched.is_empty() {
        matched.push(Aspect::General);
    }

    matched
}
