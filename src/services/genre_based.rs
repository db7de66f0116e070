use crate::models::{rating_desc, Catalog, GenreMatch};
use tracing::debug;

const MAX_RESULTS: usize = 5;

// Non-overlapping occurrences; an empty needle matches nothing.
fn substring_count(haystack: &str, needle: &str) -> u32 {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count() as u32
}

/// Ranks the catalog against a target genre list.
///
/// The genre field is free-form text, so membership is case-insensitive
/// substring containment. `genre_match` sums occurrences over the query
/// genres and may exceed the number of query genres when a genre name repeats
/// inside the field. Ties break on rating, unrated movies last.
pub fn recommend(genres: &[String], catalog: &Catalog) -> Vec<GenreMatch> {
    if genres.is_empty() {
        return Vec::new();
    }

    let lowered: Vec<String> = genres.iter().map(|genre| genre.to_lowercase()).collect();

    let mut matches: Vec<GenreMatch> = catalog
        .movies()
        .iter()
        .filter_map(|movie| {
            let genre_field = movie.genre.to_lowercase();
            let genre_match: u32 = lowered
                .iter()
                .map(|genre| substring_count(&genre_field, genre))
                .sum();
            (genre_match > 0).then(|| GenreMatch {
                movie: movie.clone(),
                genre_match,
            })
        })
        .collect();

    matches.sort_by(|a, b| {
        b.genre_match
            .cmp(&a.genre_match)
            .then_with(|| rating_desc(&a.movie, &b.movie))
    });
    matches.truncate(MAX_RESULTS);

    debug!("Genre recommender selected {} movies", matches.len());
    matches
}
