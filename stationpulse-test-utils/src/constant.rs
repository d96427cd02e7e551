//! Fixture values shared across tests.

/// Default station name used by fixtures.
pub static TEST_STATION_NAME: &str = "Rajiv Chowk";

/// Default line a fixture station belongs to, mirroring the column default.
pub static TEST_STATION_LINE: &str = "Blue Line";

/// Default location of a fixture station.
pub static TEST_STATION_LOCATION: &str = "Connaught Place, New Delhi";

/// Default commuter username used by fixtures.
pub static TEST_USERNAME: &str = "commuter";

/// Default star rating given by fixture reviews.
pub const TEST_RATING: i32 = 3;
