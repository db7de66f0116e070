use crate::models::{rating_desc, Catalog, PreferenceMatch};
use crate::services::genre_map::{SurveyMood, ViewingCompany, YearRange};
use std::cmp::Ordering;
use tracing::debug;

const MAX_RESULTS: usize = 5;
const EXPLICIT_GENRE_POINTS: f32 = 2.0;
const CATEGORY_POINTS: f32 = 1.0;
const IMPLIED_GENRE_POINTS: f32 = 1.5;

/// Questionnaire answers driving the additive scorer. Mood and purpose come
/// in as display labels; anything unrecognized parses to `None` and simply
/// contributes no points.
#[derive(Debug, Clone)]
pub struct PreferenceQuery {
    pub mood: Option<SurveyMood>,
    pub purpose: Option<ViewingCompany>,
    pub genres: Vec<String>,
    pub categories: Vec<String>,
    pub year_range: YearRange,
}

impl PreferenceQuery {
    pub fn new(
        mood: &str,
        purpose: &str,
        genres: Vec<String>,
        categories: Vec<String>,
        year_range: YearRange,
    ) -> Self {
        Self {
            mood: SurveyMood::from_label(mood),
            purpose: ViewingCompany::from_label(purpose),
            genres,
            categories,
            year_range,
        }
    }
}

fn score_movie(query: &PreferenceQuery, genre_field: &str, description: &str) -> f32 {
    let mut score = 0.0;

    for genre in &query.genres {
        if genre_field.contains(&genre.to_lowercase()) {
            score += EXPLICIT_GENRE_POINTS;
        }
    }
    for category in &query.categories {
        if description.contains(&category.to_lowercase()) {
            score += CATEGORY_POINTS;
        }
    }
    if let Some(mood) = query.mood {
        for genre in mood.genres() {
            if genre_field.contains(&genre.to_lowercase()) {
                score += IMPLIED_GENRE_POINTS;
            }
        }
    }
    if let Some(purpose) = query.purpose {
        for genre in purpose.genres() {
            if genre_field.contains(&genre.to_lowercase()) {
                score += IMPLIED_GENRE_POINTS;
            }
        }
    }

    score
}

/// Scores the catalog against the questionnaire answers.
///
/// Movies outside the year bucket (or without a year) are excluded; everything
/// inside competes on the additive score, rating as tie-break, top 5 returned.
/// Zero-score movies inside the bucket stay eligible.
pub fn recommend(query: &PreferenceQuery, catalog: &Catalog) -> Vec<PreferenceMatch> {
    let (min_year, max_year) = query.year_range.bounds();

    let mut matches: Vec<PreferenceMatch> = catalog
        .movies()
        .iter()
        .filter(|movie| {
            movie
                .year
                .map_or(false, |year| year >= min_year && year <= max_year)
        })
        .map(|movie| PreferenceMatch {
            score: score_movie(
                query,
                &movie.genre.to_lowercase(),
                &movie.description.to_lowercase(),
            ),
            movie: movie.clone(),
        })
        .collect();

    matches.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| rating_desc(&a.movie, &b.movie))
    });
    matches.truncate(MAX_RESULTS);

    debug!("Preference recommender selected {} movies", matches.len());
    matches
}
