use crate::services::mood::MoodLabel;
use serde::{Deserialize, Serialize};

/// Genre hints for the free-text mood path.
pub fn genres_for_mood(mood: MoodLabel) -> &'static [&'static str] {
    match mood {
        MoodLabel::Senang => &["Comedy", "Adventure", "Animation"],
        MoodLabel::Sedih => &["Drama", "Romance"],
        MoodLabel::Semangat => &["Action", "Adventure", "Sport"],
        MoodLabel::Takut => &["Horror", "Thriller"],
        MoodLabel::Penasaran => &["Mystery", "Crime", "Thriller"],
        MoodLabel::Marah => &["Action", "Crime", "Drama"],
        MoodLabel::Bosan => &["Adventure", "Fantasy", "Sci-Fi"],
        MoodLabel::Cinta => &["Romance", "Drama", "Comedy"],
        MoodLabel::Tegang => &["Thriller", "Mystery", "Crime"],
    }
}

/// Questionnaire mood vocabulary. Overlaps the free-text labels in spelling
/// but carries its own genre lists; the two vocabularies stay separate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurveyMood {
    Senang,
    Sedih,
    Bosan,
    Semangat,
    Penasaran,
}

impl SurveyMood {
    /// Parses the questionnaire's display label. Anything else is simply not
    /// a survey mood and contributes nothing to scoring.
    pub fn from_label(raw: &str) -> Option<SurveyMood> {
        match raw {
            "Senang" => Some(SurveyMood::Senang),
            "Sedih" => Some(SurveyMood::Sedih),
            "Bosan" => Some(SurveyMood::Bosan),
            "Semangat" => Some(SurveyMood::Semangat),
            "Penasaran" => Some(SurveyMood::Penasaran),
            _ => None,
        }
    }

    pub fn genres(self) -> &'static [&'static str] {
        match self {
            SurveyMood::Senang => &["Comedy", "Romance", "Adventure"],
            SurveyMood::Sedih => &["Drama", "Romance"],
            SurveyMood::Bosan => &["Action", "Adventure", "Sci-Fi"],
            SurveyMood::Semangat => &["Action", "Sport", "Adventure"],
            SurveyMood::Penasaran => &["Mystery", "Thriller", "Crime"],
        }
    }
}

/// Who the user plans to watch with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewingCompany {
    Alone,
    Family,
    Partner,
    Friends,
}

impl ViewingCompany {
    pub fn from_label(raw: &str) -> Option<ViewingCompany> {
        match raw {
            "Nonton sendirian" => Some(ViewingCompany::Alone),
            "Keluarga" => Some(ViewingCompany::Family),
            "Pasangan" => Some(ViewingCompany::Partner),
            "Teman" => Some(ViewingCompany::Friends),
            _ => None,
        }
    }

    pub fn genres(self) -> &'static [&'static str] {
        match self {
            ViewingCompany::Alone => &["Drama", "Thriller", "Mystery"],
            ViewingCompany::Family => &["Animation", "Adventure", "Family"],
            ViewingCompany::Partner => &["Romance", "Comedy", "Drama"],
            ViewingCompany::Friends => &["Action", "Comedy", "Horror"],
        }
    }
}

/// One of the four named historical-era buckets used to filter
/// questionnaire results. Bounds are inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YearRange {
    Latest,
    LastFiveToTen,
    Classic,
    Vintage,
}

impl YearRange {
    pub const KEYS: [&'static str; 4] = [
        "Film Terbaru (2020+)",
        "Film 5-10 Tahun Terakhir (2015-2020)",
        "Film Klasik (2000-2015)",
        "Film Lawas (Sebelum 2000)",
    ];

    pub fn from_key(raw: &str) -> Option<YearRange> {
        match raw {
            "Film Terbaru (2020+)" => Some(YearRange::Latest),
            "Film 5-10 Tahun Terakhir (2015-2020)" => Some(YearRange::LastFiveToTen),
            "Film Klasik (2000-2015)" => Some(YearRange::Classic),
            "Film Lawas (Sebelum 2000)" => Some(YearRange::Vintage),
            _ => None,
        }
    }

    pub fn bounds(self) -> (i32, i32) {
        match self {
            YearRange::Latest => (2020, 2025),
            YearRange::LastFiveToTen => (2015, 2020),
            YearRange::Classic => (2000, 2015),
            YearRange::Vintage => (1900, 2000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_free_text_mood_has_genres() {
        for mood in MoodLabel::ALL {
            let genres = genres_for_mood(mood);
            assert!(genres.len() >= 2 && genres.len() <= 3);
        }
    }

    #[test]
    fn test_survey_vocabulary_differs_from_free_text() {
        // Same spelling, different genre hints: the tables are independent.
        assert_eq!(
            SurveyMood::Bosan.genres(),
            &["Action", "Adventure", "Sci-Fi"]
        );
        assert_eq!(
            genres_for_mood(MoodLabel::Bosan),
            &["Adventure", "Fantasy", "Sci-Fi"]
        );
    }

    #[test]
    fn test_unrecognized_survey_labels_parse_to_none() {
        assert_eq!(SurveyMood::from_label("Marah"), None);
        assert_eq!(SurveyMood::from_label("senang"), None);
        assert_eq!(ViewingCompany::from_label("Sendiri"), None);
    }

    #[test]
    fn test_year_range_keys_round_trip() {
        for key in YearRange::KEYS {
            assert!(YearRange::from_key(key).is_some());
        }
        assert_eq!(YearRange::from_key("Film Terbaru"), None);
    }

    #[test]
    fn test_year_range_bounds() {
        assert_eq!(YearRange::Latest.bounds(), (2020, 2025));
        assert_eq!(YearRange::LastFiveToTen.bounds(), (2015, 2020));
        assert_eq!(YearRange::Classic.bounds(), (2000, 2015));
        assert_eq!(YearRange::Vintage.bounds(), (1900, 2000));
    }
}
