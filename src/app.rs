use crate::{
    config::Config,
    error::Result,
    ml::OpenRouterClassifier,
    routes::api_routes,
    services::{
        mood::MoodClassifier, CatalogStore, DisabledClassifier, RecommendationService,
    },
};
use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{info, warn};
use std::net::TcpListener;
use std::sync::Arc;

pub struct Application {
    port: u16,
    host: String,
    config: Config,
}

impl Application {
    /// Create a new application instance
    pub fn new(config: &Config) -> Self {
        Self {
            port: config.port,
            host: config.host.clone(),
            config: config.clone(),
        }
    }

    /// Build and run the server
    pub async fn run(&self) -> Result<()> {
        // Always bind to 0.0.0.0 for Docker/Render compatibility
        let bind_address = format!("0.0.0.0:{}", self.port);
        let listener = TcpListener::bind(&bind_address)?;
        info!("Starting server at http://{}:{}", self.host, self.port);

        self.run_with_listener(listener).await
    }

    /// Run the server with a specific TCP listener
    /// This is useful for testing where we want to use a random port
    pub async fn run_with_listener(&self, listener: TcpListener) -> Result<()> {
        // Load the catalog once; an unreadable file means an empty catalog,
        // reloadable later via the catalog endpoint.
        let store = web::Data::new(CatalogStore::open(self.config.catalog_path.clone()));
        if store.snapshot().is_empty() {
            warn!(
                "Catalog {:?} is empty or unreadable; recommendations will be empty until a reload succeeds",
                self.config.catalog_path
            );
        }

        let classifier: Arc<dyn MoodClassifier> = match &self.config.openrouter_api_key {
            Some(api_key) => {
                info!("Mood classifier enabled (model {})", self.config.openrouter_model);
                Arc::new(OpenRouterClassifier::new(api_key, &self.config)?)
            }
            None => {
                info!("No classifier API key configured; mood detection uses keywords only");
                Arc::new(DisabledClassifier)
            }
        };

        let recommendation_service = web::Data::new(RecommendationService::new(classifier));

        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header();

            App::new()
                .wrap(cors)
                .wrap(Logger::default())
                .app_data(store.clone())
                .app_data(recommendation_service.clone())
                .service(api_routes())
        })
        .listen(listener)?
        .run()
        .await?;

        Ok(())
    }
}
