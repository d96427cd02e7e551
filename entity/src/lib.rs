pub mod prelude;

pub mod aspect_rating;
pub mod commuter;
pub mod review;
pub mod station;
