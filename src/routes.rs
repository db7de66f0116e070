use actix_web::{web, Scope};

use crate::handlers::{catalog_reload, catalog_titles, health_check, recommendations_config};

/// Configure all routes for the API
pub fn api_routes() -> Scope {
    web::scope("/api")
        .service(health_check)
        .service(catalog_titles)
        .service(catalog_reload)
        .configure(recommendations_config)
}
