use crate::services::CatalogStore;
use actix_web::{get, web, HttpResponse};

#[get("/health")]
pub async fn health_check(store: web::Data<CatalogStore>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "catalog_movies": store.snapshot().len(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
