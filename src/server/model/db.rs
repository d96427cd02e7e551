//! Database model type aliases.
//!
//! Short names for the SeaORM models generated in the `entity` crate, so service and
//! repository signatures do not need to spell out the module paths.

/// Type alias for a transit station.
///
/// # Fields (from `entity::station::Model`)
/// - `id` - Primary key
/// - `name` - Unique station name
/// - `line` - Transit line the station is on
/// - `location` - Free-form location description
pub type StationModel = entity::station::Model;

/// Type alias for a commuter account that authors reviews.
pub type CommuterModel = entity::commuter::Model;

/// Type alias for a commuter review of a station.
///
/// # Fields (from `entity::review::Model`)
/// - `id` - Primary key
/// - `station_id` - Reviewed station
/// - `commuter_id` - Review author
/// - `text` - Free-text review body that aspects are detected in
/// - `rating` - Star rating, 1 to 5
/// - `sentiment` - Overall sentiment, `None` until the review has been analyzed
/// - `created_at` - Submission timestamp
pub type ReviewModel = entity::review::Model;

/// Type alias for one (review, aspect, sentiment) classification row.
pub type AspectRatingModel = entity::aspect_rating::Model;
