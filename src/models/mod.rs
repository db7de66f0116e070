use serde::{Deserialize, Serialize};

// Re-export types from movie.rs
pub use movie::{rating_desc, Catalog, MovieRecord};

mod movie;

/// Request structure for mood-based recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodRequest {
    /// Free text describing how the user feels right now
    pub text: String,
}

/// Request structure for the similar-movies mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarRequest {
    /// Exact title of a movie the user liked (must exist in the catalog)
    pub title: String,
}

/// Request structure for the questionnaire mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesRequest {
    pub mood: String,
    pub purpose: String,
    /// Up to 3 explicit genres; at least one is required
    #[serde(default)]
    pub genres: Vec<String>,
    /// Up to 3 theme/category keywords matched against descriptions
    #[serde(default)]
    pub categories: Vec<String>,
    /// One of the four named year-range buckets
    pub year_range: String,
}

/// A catalog entry selected by the genre-based recommender
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreMatch {
    pub movie: MovieRecord,
    /// Count of query genres found (by substring) in the movie's genre field
    pub genre_match: u32,
}

/// A catalog entry selected by the content-similarity recommender
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarMovie {
    pub movie: MovieRecord,
    pub similarity: f32,
    /// Blend of similarity and rating used for the final ordering
    pub combined_score: f32,
}

/// A catalog entry selected by the questionnaire recommender
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferenceMatch {
    pub movie: MovieRecord,
    pub score: f32,
}

/// Response structure for mood-based recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodRecommendationResponse {
    /// The detected mood label
    pub mood: String,
    /// Genre hints derived from the mood
    pub genres: Vec<String>,
    pub recommendations: Vec<GenreMatch>,
}

/// Response structure for the similar-movies mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarResponse {
    pub recommendations: Vec<SimilarMovie>,
}

/// Response structure for the questionnaire mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesResponse {
    pub recommendations: Vec<PreferenceMatch>,
}
