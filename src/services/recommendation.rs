use crate::models::{Catalog, GenreMatch, PreferenceMatch, SimilarMovie};
use crate::services::genre_based;
use crate::services::genre_map::genres_for_mood;
use crate::services::mood::{MoodClassifier, MoodLabel, MoodResolver};
use crate::services::preferences::{self, PreferenceQuery};
use crate::services::similar;
use std::sync::Arc;
use tracing::info;

/// Outcome of the free-text path: the detected mood, the genre hints it
/// mapped to, and the ranked movies.
#[derive(Debug, Clone)]
pub struct MoodRecommendation {
    pub mood: MoodLabel,
    pub genres: Vec<String>,
    pub movies: Vec<GenreMatch>,
}

/// Stateless façade over the resolver and the pure recommenders. Every call
/// works on the catalog snapshot it is handed; the service holds no catalog
/// state of its own.
#[derive(Clone)]
pub struct RecommendationService {
    resolver: MoodResolver,
}

impl RecommendationService {
    pub fn new(classifier: Arc<dyn MoodClassifier>) -> Self {
        Self {
            resolver: MoodResolver::new(classifier),
        }
    }

    pub async fn recommend_from_mood(
        &self,
        text: &str,
        catalog: &Catalog,
    ) -> MoodRecommendation {
        let mood = self.resolver.resolve(text).await;
        let genres: Vec<String> = genres_for_mood(mood)
            .iter()
            .map(|genre| genre.to_string())
            .collect();
        info!(mood = %mood, genres = ?genres, "Recommending from detected mood");

        let movies = genre_based::recommend(&genres, catalog);
        MoodRecommendation {
            mood,
            genres,
            movies,
        }
    }

    pub fn recommend_similar(&self, title: &str, catalog: &Catalog) -> Vec<SimilarMovie> {
        similar::recommend(title, catalog)
    }

    pub fn recommend_from_preferences(
        &self,
        query: &PreferenceQuery,
        catalog: &Catalog,
    ) -> Vec<PreferenceMatch> {
        preferences::recommend(query, catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MovieRecord;
    use crate::services::mood::DisabledClassifier;

    fn movie(title: &str, genre: &str, rating: Option<f32>) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            year: Some(2021),
            genre: genre.to_string(),
            description: String::new(),
            rating,
        }
    }

    #[tokio::test]
    async fn test_mood_flow_resolves_maps_and_ranks_without_classifier() {
        let catalog = Catalog::new(vec![
            movie("space epic", "Sci-Fi Adventure", Some(8.2)),
            movie("weepy", "Drama Romance", Some(9.0)),
            movie("quest", "Fantasy", Some(7.1)),
        ]);
        let service = RecommendationService::new(Arc::new(DisabledClassifier));

        let result = service
            .recommend_from_mood("aku sangat bosan dengan rutinitas", &catalog)
            .await;

        assert_eq!(result.mood, MoodLabel::Bosan);
        assert_eq!(result.genres, vec!["Adventure", "Fantasy", "Sci-Fi"]);

        let titles: Vec<_> = result
            .movies
            .iter()
            .map(|m| m.movie.title.as_str())
            .collect();
        assert_eq!(titles, vec!["space epic", "quest"]);
        assert_eq!(result.movies[0].genre_match, 2);
    }

    #[tokio::test]
    async fn test_empty_catalog_is_handled_uniformly() {
        let catalog = Catalog::default();
        let service = RecommendationService::new(Arc::new(DisabledClassifier));

        let from_mood = service.recommend_from_mood("senang sekali", &catalog).await;
        assert!(from_mood.movies.is_empty());
        assert!(service.recommend_similar("Anything", &catalog).is_empty());
    }
}
