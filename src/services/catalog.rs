use crate::error::{ApiError, Result};
use crate::models::{Catalog, MovieRecord};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{error, info, warn};

const REQUIRED_COLUMNS: [&str; 5] = ["title", "year", "genre", "description", "rating"];

/// Loads and cleans the catalog file, surfacing the typed error.
///
/// Cleaning rules:
/// - every required column must be present (order irrelevant)
/// - `year`/`rating` coerce leniently, unparsable values become `None`
/// - `genre`/`description` default to the empty string
/// - rows without a usable title are dropped
/// - duplicate titles keep the first occurrence in source order
pub fn try_load_catalog(path: &Path) -> Result<Catalog> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| match e.kind() {
        csv::ErrorKind::Io(_) => {
            ApiError::InternalError(format!("Failed to open catalog file {:?}: {}", path, e))
        }
        _ => ApiError::ParseError(e.to_string()),
    })?;

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(ApiError::SchemaError(format!(
                "missing required column '{}'",
                column
            )));
        }
    }

    let mut seen_titles: HashSet<String> = HashSet::new();
    let mut movies = Vec::new();

    for row in reader.deserialize::<MovieRecord>() {
        let record = row?;
        if record.title.trim().is_empty() {
            continue;
        }
        if !seen_titles.insert(record.title.clone()) {
            continue;
        }
        movies.push(record);
    }

    Ok(Catalog::new(movies))
}

/// Degrading wrapper around [`try_load_catalog`]: any failure is reported and
/// collapses to the empty catalog, the uniform not-ready signal downstream.
pub fn load_catalog(path: &Path) -> Catalog {
    match try_load_catalog(path) {
        Ok(catalog) => {
            if catalog.is_empty() {
                warn!("Catalog {:?} is empty after cleaning", path);
            } else {
                info!("Loaded {} movies from {:?}", catalog.len(), path);
            }
            catalog
        }
        Err(err) => {
            error!("Failed to load catalog from {:?}: {}", path, err);
            Catalog::default()
        }
    }
}

/// Externally owned catalog cache: loaded once, shared read-only, manually
/// reloadable. Readers always see a complete snapshot; a reload swaps the
/// `Arc` atomically under the lock, never a half-updated catalog.
pub struct CatalogStore {
    path: PathBuf,
    current: RwLock<Arc<Catalog>>,
}

impl CatalogStore {
    /// Loads once from `path`. An unreadable or invalid file yields an empty
    /// snapshot rather than failing startup.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let catalog = Arc::new(load_catalog(&path));
        Self {
            path,
            current: RwLock::new(catalog),
        }
    }

    pub fn snapshot(&self) -> Arc<Catalog> {
        let guard = self
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Re-reads the file and swaps in the fresh snapshot.
    pub fn reload(&self) -> Arc<Catalog> {
        let fresh = Arc::new(load_catalog(&self.path));
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::clone(&fresh);
        fresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(content.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn test_load_cleans_and_coerces_rows() {
        let file = write_csv(
            "title,year,genre,description,rating\n\
             Inception,2010,\"Action, Sci-Fi\",\"A thief who steals secrets, via dreams\",8.8\n\
             Old Print,unknown,Drama,,not-rated\n",
        );

        let catalog = try_load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);

        let inception = &catalog.movies()[0];
        assert_eq!(inception.title, "Inception");
        assert_eq!(inception.year, Some(2010));
        assert_eq!(inception.genre, "Action, Sci-Fi");
        assert_eq!(inception.rating, Some(8.8));

        let old_print = &catalog.movies()[1];
        assert_eq!(old_print.year, None);
        assert_eq!(old_print.rating, None);
        assert_eq!(old_print.description, "");
    }

    #[test]
    fn test_quoted_fields_tolerate_embedded_newlines() {
        let file = write_csv(
            "title,year,genre,description,rating\n\
             Quiet Place,2018,Horror,\"Silence,\nor else\",7.5\n",
        );

        let catalog = try_load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.movies()[0].description, "Silence,\nor else");
    }

    #[test]
    fn test_missing_required_column_is_a_schema_error() {
        let file = write_csv("title,year,genre,description\nInception,2010,Sci-Fi,Dreams\n");

        match try_load_catalog(file.path()) {
            Err(ApiError::SchemaError(message)) => assert!(message.contains("rating")),
            other => panic!("expected SchemaError, got {:?}", other.map(|c| c.len())),
        }

        // The degrading wrapper reports and hands back the empty catalog.
        assert!(load_catalog(file.path()).is_empty());
    }

    #[test]
    fn test_malformed_rows_are_a_parse_error() {
        let file = write_csv(
            "title,year,genre,description,rating\n\
             Inception,2010,Sci-Fi,Dreams,8.8,extra-column\n",
        );

        assert!(matches!(
            try_load_catalog(file.path()),
            Err(ApiError::ParseError(_))
        ));
        assert!(load_catalog(file.path()).is_empty());
    }

    #[test]
    fn test_duplicate_titles_keep_first_occurrence() {
        let file = write_csv(
            "title,year,genre,description,rating\n\
             Heat,1995,Crime,First copy,8.3\n\
             Heat,2010,Drama,Second copy,5.0\n",
        );

        let catalog = try_load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.movies()[0].year, Some(1995));
        assert_eq!(catalog.movies()[0].description, "First copy");
    }

    #[test]
    fn test_untitled_rows_are_dropped() {
        let file = write_csv(
            "title,year,genre,description,rating\n\
             ,2010,Drama,No title here,6.0\n\
             Real Movie,2011,Comedy,Has a title,7.0\n",
        );

        let catalog = try_load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.movies()[0].title, "Real Movie");
    }

    #[test]
    fn test_missing_file_degrades_to_empty_catalog() {
        assert!(load_catalog(Path::new("no-such-movies.csv")).is_empty());
    }

    #[test]
    fn test_store_reload_swaps_snapshots() {
        let file = write_csv(
            "title,year,genre,description,rating\n\
             Only One,2020,Drama,Single row,7.0\n",
        );

        let store = CatalogStore::open(file.path());
        let before = store.snapshot();
        assert_eq!(before.len(), 1);

        std::fs::write(
            file.path(),
            "title,year,genre,description,rating\n\
             Only One,2020,Drama,Single row,7.0\n\
             Second,2021,Comedy,Added later,6.5\n",
        )
        .expect("rewrite catalog");

        let after = store.reload();
        assert_eq!(after.len(), 2);
        // The pre-reload snapshot is untouched.
        assert_eq!(before.len(), 1);
        assert_eq!(store.snapshot().len(), 2);
    }
}
