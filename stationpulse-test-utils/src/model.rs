//! Database model type aliases for test utilities, matching those in the main crate.

pub type StationModel = entity::station::Model;

pub type CommuterModel = entity::commuter::Model;

pub type ReviewModel = entity::review::Model;

pub type AspectRatingModel = entity::aspect_rating::Model;
