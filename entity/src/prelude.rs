pub use super::aspect_rating::Entity as AspectRating;
pub use super::commuter::Entity as Commuter;
pub use super::review::Entity as Review;
pub use super::station::Entity as Station;
