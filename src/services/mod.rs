pub mod allocator;
pub mod catalog;
pub mod recommendations;
pub mod sampling;
pub mod tracker;

pub use allocator::{Allocation, RECOMMENDATION_COUNT};
pub use catalog::Catalog;
pub use recommendations::RecommendationService;
pub use tracker::InterestTracker;
