pub mod catalog;
pub mod health;
pub mod recommendations;

pub use catalog::{catalog_reload, catalog_titles};
pub use health::health_check;
pub use recommendations::recommendations_config;
