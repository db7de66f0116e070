use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;

fn deserialize_lenient_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_year))
}

fn deserialize_lenient_rating<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse::<f32>().ok()))
}

// Accepts "2010" as well as "2010.0"; anything unparsable becomes None.
fn parse_year(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i32>()
        .ok()
        .or_else(|| trimmed.parse::<f64>().ok().map(|y| y as i32))
}

/// One cleaned catalog row. Immutable once the catalog is loaded;
/// recommenders clone records into their own result types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_lenient_year")]
    pub year: Option<i32>,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_lenient_rating")]
    pub rating: Option<f32>,
}

/// Orders by rating descending, movies without a rating after every rated one.
pub fn rating_desc(a: &MovieRecord, b: &MovieRecord) -> Ordering {
    match (a.rating, b.rating) {
        (Some(ra), Some(rb)) => rb.partial_cmp(&ra).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// The cleaned, deduplicated scoring universe. Loaded once by the catalog
/// loader and shared read-only with every recommender; an empty catalog is
/// the uniform not-ready signal.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<MovieRecord>,
}

impl Catalog {
    pub fn new(movies: Vec<MovieRecord>) -> Self {
        Self { movies }
    }

    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Exact-title lookup, returning the record's position in source order.
    pub fn position_by_title(&self, title: &str) -> Option<usize> {
        self.movies.iter().position(|movie| movie.title == title)
    }

    pub fn titles(&self) -> Vec<String> {
        self.movies.iter().map(|movie| movie.title.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, rating: Option<f32>) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            year: Some(2020),
            genre: "Drama".to_string(),
            description: String::new(),
            rating,
        }
    }

    #[test]
    fn test_rating_desc_orders_missing_last() {
        let mut movies = vec![
            movie("unrated", None),
            movie("low", Some(5.1)),
            movie("high", Some(8.8)),
        ];
        movies.sort_by(rating_desc);

        let titles: Vec<_> = movies.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["high", "low", "unrated"]);
    }

    #[test]
    fn test_parse_year_accepts_float_strings() {
        assert_eq!(parse_year("2010"), Some(2010));
        assert_eq!(parse_year(" 2010.0 "), Some(2010));
        assert_eq!(parse_year("unknown"), None);
        assert_eq!(parse_year(""), None);
    }

    #[test]
    fn test_position_by_title_is_exact_match() {
        let catalog = Catalog::new(vec![movie("Inception", Some(8.8))]);
        assert_eq!(catalog.position_by_title("Inception"), Some(0));
        assert_eq!(catalog.position_by_title("inception"), None);
        assert_eq!(catalog.position_by_title("Incep"), None);
    }
}
