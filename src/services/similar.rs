use crate::ml::tfidf::{cosine_similarity, TfidfVectorizer};
use crate::models::{Catalog, MovieRecord, SimilarMovie};
use std::cmp::Ordering;
use tracing::debug;

const SIMILARITY_THRESHOLD: f32 = 0.3;
const MAX_RESULTS: usize = 3;
const SIMILARITY_WEIGHT: f32 = 0.7;
const RATING_WEIGHT: f32 = 0.3;

// The genre string is repeated three times to bias the vector space toward
// genre over free-text description.
fn combined_features(movie: &MovieRecord) -> String {
    let genre = movie.genre.to_lowercase();
    format!(
        "{} {} {} {}",
        genre,
        genre,
        genre,
        movie.description.to_lowercase()
    )
}

/// Ranks the catalog by text similarity to a reference title.
///
/// Movies with cosine similarity above 0.3 compete for three slots by
/// similarity; the slots are then re-ranked by a blend of similarity and
/// rating (missing rating counts as 0 in the blend). An unknown reference
/// title or an empty candidate set yields an empty result, never an error.
pub fn recommend(title: &str, catalog: &Catalog) -> Vec<SimilarMovie> {
    let Some(reference) = catalog.position_by_title(title) else {
        debug!(title = %title, "Similarity reference title not in catalog");
        return Vec::new();
    };

    let documents: Vec<String> = catalog.movies().iter().map(combined_features).collect();
    let mut vectorizer = TfidfVectorizer::new();
    let matrix = vectorizer.fit_transform(&documents);

    let mut candidates: Vec<(usize, f32)> = (0..catalog.len())
        .filter(|&index| index != reference)
        .map(|index| {
            (
                index,
                cosine_similarity(matrix.row(reference), matrix.row(index)),
            )
        })
        .filter(|&(_, similarity)| similarity > SIMILARITY_THRESHOLD)
        .collect();

    if candidates.is_empty() {
        debug!(title = %title, "No movie cleared the similarity threshold");
        return Vec::new();
    }

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    candidates.truncate(MAX_RESULTS);

    let mut results: Vec<SimilarMovie> = candidates
        .into_iter()
        .map(|(index, similarity)| {
            let movie = catalog.movies()[index].clone();
            let rating = movie.rating.unwrap_or(0.0);
            SimilarMovie {
                combined_score: SIMILARITY_WEIGHT * similarity
                    + RATING_WEIGHT * (rating / 10.0),
                similarity,
                movie,
            }
        })
        .collect();

    results.sort_by(|a, b| {
        b.combined_score
            .partial_cmp(&a.combined_score)
            .unwrap_or(Ordering::Equal)
    });
    results
}
