use crate::{
    error::ApiError,
    models::{
        MoodRecommendationResponse, MoodRequest, PreferencesRequest, PreferencesResponse,
        SimilarRequest, SimilarResponse,
    },
    services::{genre_map::YearRange, CatalogStore, PreferenceQuery, RecommendationService},
};
use actix_web::{
    web::{self, Json},
    HttpResponse,
};

const MAX_SELECTIONS: usize = 3;

pub fn recommendations_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/recommendations/mood").route(web::post().to(recommend_from_mood)),
    )
    .service(web::resource("/recommendations/similar").route(web::post().to(recommend_similar)))
    .service(
        web::resource("/recommendations/preferences")
            .route(web::post().to(recommend_from_preferences)),
    );
}

/// Recommend movies from a free-text mood description
pub async fn recommend_from_mood(
    request: Json<MoodRequest>,
    service: web::Data<RecommendationService>,
    store: web::Data<CatalogStore>,
) -> Result<HttpResponse, ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::InvalidInput("Text cannot be empty".to_string()));
    }

    let catalog = store.snapshot();
    let result = service.recommend_from_mood(&request.text, &catalog).await;

    Ok(HttpResponse::Ok().json(MoodRecommendationResponse {
        mood: result.mood.to_string(),
        genres: result.genres,
        recommendations: result.movies,
    }))
}

/// Recommend movies similar to a catalog title. An unknown title yields an
/// empty list, not an error.
pub async fn recommend_similar(
    request: Json<SimilarRequest>,
    service: web::Data<RecommendationService>,
    store: web::Data<CatalogStore>,
) -> Result<HttpResponse, ApiError> {
    if request.title.trim().is_empty() {
        return Err(ApiError::InvalidInput("Title cannot be empty".to_string()));
    }

    let catalog = store.snapshot();
    let recommendations = service.recommend_similar(&request.title, &catalog);

    Ok(HttpResponse::Ok().json(SimilarResponse { recommendations }))
}

/// Recommend movies from the questionnaire answers
pub async fn recommend_from_preferences(
    request: Json<PreferencesRequest>,
    service: web::Data<RecommendationService>,
    store: web::Data<CatalogStore>,
) -> Result<HttpResponse, ApiError> {
    if request.genres.is_empty() {
        return Err(ApiError::InvalidInput(
            "Select at least one genre".to_string(),
        ));
    }
    if request.genres.len() > MAX_SELECTIONS || request.categories.len() > MAX_SELECTIONS {
        return Err(ApiError::InvalidInput(format!(
            "At most {} genres and {} categories are allowed",
            MAX_SELECTIONS, MAX_SELECTIONS
        )));
    }

    let year_range = YearRange::from_key(&request.year_range).ok_or_else(|| {
        ApiError::InvalidInput(format!("Unknown year range '{}'", request.year_range))
    })?;

    let query = PreferenceQuery::new(
        &request.mood,
        &request.purpose,
        request.genres.clone(),
        request.categories.clone(),
        year_range,
    );

    let catalog = store.snapshot();
    let recommendations = service.recommend_from_preferences(&query, &catalog);

    Ok(HttpResponse::Ok().json(PreferencesResponse { recommendations }))
}
