//! Core domain types for a user's film history.
//!
//! A `FilmRecord` is the normalized shape every loader produces, whatever the
//! raw input looked like (CSV export, JSON list, demo fixture). Records are
//! immutable once handed to the analysis pipeline.

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases & Defaults
// =============================================================================

/// Release year of a film
pub type Year = i32;

/// Year assumed when a loader cannot find one
pub const DEFAULT_YEAR: Year = 2020;

/// Highest rating on the 0-5 star scale
pub const MAX_RATING: f32 = 5.0;

/// Genre used when nothing at all is known about a film
pub const FALLBACK_GENRE: &str = "Drama";

/// Companion tag the CSV path adds next to [`FALLBACK_GENRE`]
pub const UNKNOWN_GENRE: &str = "Unknown";

// =============================================================================
// Film Record
// =============================================================================

/// One watched film.
///
/// - `title` is only used for display and genre inference, never for scoring
/// - `year` only drives the recency boost
/// - `rating` is on a 0-5 scale, `0.0` meaning "unrated"
/// - `genres` are raw tags: possibly empty, duplicated or oddly cased
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmRecord {
    pub title: String,
    #[serde(default = "default_year")]
    pub year: Year,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub genres: Vec<String>,
}

fn default_year() -> Year {
    DEFAULT_YEAR
}

impl FilmRecord {
    /// Create a record, coercing the rating into the valid range.
    pub fn new(
        title: impl Into<String>,
        year: Year,
        rating: f32,
        genres: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            year,
            rating: sanitize_rating(rating),
            genres,
        }
    }

    /// Convenience constructor for string-literal genre lists.
    pub fn with_genres(title: impl Into<String>, year: Year, rating: f32, genres: &[&str]) -> Self {
        Self::new(
            title,
            year,
            rating,
            genres.iter().map(|g| g.to_string()).collect(),
        )
    }

    /// Whether the user gave this film a star rating
    pub fn is_rated(&self) -> bool {
        self.rating > 0.0
    }

    /// Whether the record carries any genre signal
    pub fn has_genres(&self) -> bool {
        !self.genres.is_empty()
    }

    /// Whether the genres are only the loader's placeholder tags
    /// (none, `[Drama]` or `[Drama, Unknown]`) rather than real data
    pub fn has_placeholder_genres(&self) -> bool {
        match self.genres.as_slice() {
            [] => true,
            [only] => only == FALLBACK_GENRE,
            [first, second] => first == FALLBACK_GENRE && second == UNKNOWN_GENRE,
            _ => false,
        }
    }
}

/// Clamp a rating into `[0, 5]`; NaN, infinities and negatives become unrated.
pub fn sanitize_rating(rating: f32) -> f32 {
    if !rating.is_finite() || rating < 0.0 {
        0.0
    } else {
        rating.min(MAX_RATING)
    }
}

// =============================================================================
// Film History
// =============================================================================

/// A named film list, as handed over by a loader
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilmHistory {
    pub username: String,
    pub display_name: String,
    pub films: Vec<FilmRecord>,
}

impl FilmHistory {
    pub fn new(username: impl Into<String>, films: Vec<FilmRecord>) -> Self {
        let username = username.into();
        Self {
            display_name: username.clone(),
            username,
            films,
        }
    }

    /// Name to show in reports; falls back to the username
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.username
        } else {
            &self.display_name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_rating() {
        assert_eq!(sanitize_rating(4.5), 4.5);
        assert_eq!(sanitize_rating(-1.0), 0.0);
        assert_eq!(sanitize_rating(f32::NAN), 0.0);
        assert_eq!(sanitize_rating(f32::INFINITY), 0.0);
        assert_eq!(sanitize_rating(7.0), 5.0);
    }

    #[test]
    fn test_deserialize_defaults() {
        let film: FilmRecord = serde_json::from_str(r#"{"title": "Heat"}"#).unwrap();
        assert_eq!(film.year, DEFAULT_YEAR);
        assert_eq!(film.rating, 0.0);
        assert!(!film.has_genres());
        assert!(!film.is_rated());
    }

    #[test]
    fn test_placeholder_genres() {
        assert!(FilmRecord::with_genres("A", 2020, 0.0, &[]).has_placeholder_genres());
        assert!(FilmRecord::with_genres("A", 2020, 0.0, &["Drama"]).has_placeholder_genres());
        assert!(FilmRecord::with_genres("A", 2020, 0.0, &["Drama", "Unknown"]).has_placeholder_genres());

        assert!(!FilmRecord::with_genres("A", 2020, 0.0, &["Comedy"]).has_placeholder_genres());
        assert!(!FilmRecord::with_genres("A", 2020, 0.0, &["Drama", "Romance"]).has_placeholder_genres());
        assert!(!FilmRecord::with_genres("A", 2020, 0.0, &["Comedy", "Romance"]).has_placeholder_genres());
    }

    #[test]
    fn test_history_label() {
        let mut history = FilmHistory::new("cinephile123", vec![]);
        assert_eq!(history.label(), "cinephile123");

        history.display_name = "Alex Chen".to_string();
        assert_eq!(history.label(), "Alex Chen");

        history.display_name.clear();
        assert_eq!(history.label(), "cinephile123");
    }
}
