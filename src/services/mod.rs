pub mod catalog;
pub mod genre_based;
pub mod genre_map;
pub mod mood;
pub mod preferences;
pub mod recommendation;
pub mod similar;

// Re-export public types
pub use catalog::CatalogStore;
pub use mood::{DisabledClassifier, MoodLabel, MoodResolver};
pub use preferences::PreferenceQuery;
pub use recommendation::{MoodRecommendation, RecommendationService};
