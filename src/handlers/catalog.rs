use crate::services::CatalogStore;
use actix_web::{get, post, web, HttpResponse};
use tracing::info;

/// Titles in catalog order, feeding the similar-movies picker
#[get("/catalog/titles")]
pub async fn catalog_titles(store: web::Data<CatalogStore>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "titles": store.snapshot().titles()
    }))
}

/// Re-reads the catalog file and swaps in the fresh snapshot
#[post("/catalog/reload")]
pub async fn catalog_reload(store: web::Data<CatalogStore>) -> HttpResponse {
    let catalog = store.reload();
    info!("Catalog reloaded with {} movies", catalog.len());

    HttpResponse::Ok().json(serde_json::json!({
        "movies": catalog.len()
    }))
}
