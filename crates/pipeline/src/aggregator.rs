//! Weighted genre aggregation.
//!
//! Each film contributes a weight to every one of its (normalized) genres.
//! The weight grows with the user's rating and gets a small boost for recent
//! releases:
//!
//! ```text
//! weight = 1
//! rating >= 4.5  -> x2.0
//! rating >= 4.0  -> x1.5
//! rating >= 3.5  -> x1.2
//! year >= reference_year - 2 -> x1.1
//! ```
//!
//! A film with three genres adds the full weight to each of them; the weight
//! is not split.

use crate::normalizer::normalize_genre;
use crate::tally::GenreTally;
use chrono::Datelike;
use data_loader::{FilmRecord, Year};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of genres kept in the top list by default
pub const DEFAULT_TOP_N: usize = 3;

/// How many years back a release still counts as recent
pub const RECENT_WINDOW_YEARS: Year = 2;

// =============================================================================
// Configuration
// =============================================================================

/// Settings for [`GenreAggregator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregatorConfig {
    /// Size of the top-genre list
    pub top_n: usize,
    /// Year recency is measured against (normally the current year)
    pub reference_year: Year,
}

impl AggregatorConfig {
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_reference_year(mut self, reference_year: Year) -> Self {
        self.reference_year = reference_year;
        self
    }
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            reference_year: chrono::Local::now().year(),
        }
    }
}

// =============================================================================
// Output Types
// =============================================================================

/// One entry of the top-genre list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedGenre {
    pub genre: String,
    /// Accumulated weight, rounded to one decimal
    pub weight: f32,
    /// Share of the top-N list's total weight, 0-100
    pub percentage: u32,
}

/// Unrounded weight of a genre, for the full ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreWeight {
    pub genre: String,
    pub weight: f32,
}

/// Viewing statistics over the whole film list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreStats {
    /// All input records, with or without genres
    pub total_films: usize,
    /// Records with a rating above 0
    pub total_ratings: usize,
    /// Mean rating over rated films, one decimal; 0 when nothing is rated
    pub avg_rating: f32,
    /// Distinct canonical genres seen
    pub unique_genres: usize,
}

/// Result of aggregating a film list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreAnalysis {
    pub top_genres: Vec<RankedGenre>,
    pub all_genres: Vec<GenreWeight>,
    pub stats: GenreStats,
}

impl GenreAnalysis {
    /// No genre was observed at all
    pub fn is_empty(&self) -> bool {
        self.top_genres.is_empty()
    }
}

// =============================================================================
// Aggregator
// =============================================================================

/// Turns a film list into ranked genres and statistics.
///
/// Stateless between calls: all accumulation is local to [`analyze`],
/// so one aggregator can serve any number of callers.
///
/// [`analyze`]: GenreAggregator::analyze
#[derive(Debug, Clone, Default)]
pub struct GenreAggregator {
    config: AggregatorConfig,
}

impl GenreAggregator {
    pub fn new(config: AggregatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Aggregate a film list.
    ///
    /// Never fails: an input without any genre yields an empty top list,
    /// which callers must treat as "not enough data".
    pub fn analyze(&self, films: &[FilmRecord]) -> GenreAnalysis {
        let mut tally: GenreTally<f32> = GenreTally::new();

        for film in films {
            if !film.has_genres() {
                continue;
            }
            let weight = film_weight(film, self.config.reference_year);
            for genre in &film.genres {
                *tally.entry(normalize_genre(genre)) += weight;
            }
        }

        let stats = compute_stats(films, tally.len());

        // Stable sort: equal weights keep first-appearance order
        let mut ranked = tally.into_entries();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        let top_genres = rank_top(&ranked, self.config.top_n);
        let all_genres = ranked
            .into_iter()
            .map(|(genre, weight)| GenreWeight { genre, weight })
            .collect();

        debug!(
            "Aggregated {} films into {} genres (top: {:?})",
            films.len(),
            stats.unique_genres,
            top_genres.iter().map(|g| g.genre.as_str()).collect::<Vec<_>>()
        );

        GenreAnalysis {
            top_genres,
            all_genres,
            stats,
        }
    }
}

/// Aggregate with the default configuration (top 3, current year)
pub fn analyze_genres(films: &[FilmRecord]) -> GenreAnalysis {
    GenreAggregator::default().analyze(films)
}

/// Weight one film adds to each of its genres
pub fn film_weight(film: &FilmRecord, reference_year: Year) -> f32 {
    let mut weight = 1.0;

    if film.rating >= 4.5 {
        weight *= 2.0;
    } else if film.rating >= 4.0 {
        weight *= 1.5;
    } else if film.rating >= 3.5 {
        weight *= 1.2;
    }

    if film.year >= reference_year.saturating_sub(RECENT_WINDOW_YEARS) {
        weight *= 1.1;
    }

    weight
}

/// Take the first `n` sorted entries, round their weights and compute
/// percentages over the selection only
fn rank_top(sorted: &[(String, f32)], n: usize) -> Vec<RankedGenre> {
    let selected: Vec<(&str, f32)> = sorted
        .iter()
        .take(n)
        .map(|(genre, weight)| (genre.as_str(), round1(*weight)))
        .collect();

    let total: f32 = selected.iter().map(|(_, w)| w).sum();

    selected
        .into_iter()
        .map(|(genre, weight)| RankedGenre {
            genre: genre.to_string(),
            weight,
            percentage: if total > 0.0 {
                (weight / total * 100.0).round() as u32
            } else {
                0
            },
        })
        .collect()
}

fn compute_stats(films: &[FilmRecord], unique_genres: usize) -> GenreStats {
    let rated: Vec<f32> = films
        .iter()
        .filter(|f| f.is_rated())
        .map(|f| f.rating)
        .collect();

    let avg_rating = if rated.is_empty() {
        0.0
    } else {
        round1(rated.iter().sum::<f32>() / rated.len() as f32)
    };

    GenreStats {
        total_films: films.len(),
        total_ratings: rated.len(),
        avg_rating,
        unique_genres,
    }
}

/// Round to one decimal place
pub(crate) fn round1(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: Year = 2025;

    fn aggregator() -> GenreAggregator {
        GenreAggregator::new(AggregatorConfig::default().with_reference_year(YEAR))
    }

    fn film(title: &str, year: Year, rating: f32, genres: &[&str]) -> FilmRecord {
        FilmRecord::with_genres(title, year, rating, genres)
    }

    #[test]
    fn test_film_weight_tiers() {
        assert_eq!(film_weight(&film("a", 1990, 0.0, &[]), YEAR), 1.0);
        assert_eq!(film_weight(&film("a", 1990, 3.0, &[]), YEAR), 1.0);
        assert_eq!(film_weight(&film("a", 1990, 3.5, &[]), YEAR), 1.2);
        assert_eq!(film_weight(&film("a", 1990, 4.0, &[]), YEAR), 1.5);
        assert_eq!(film_weight(&film("a", 1990, 4.5, &[]), YEAR), 2.0);
        assert_eq!(film_weight(&film("a", 1990, 5.0, &[]), YEAR), 2.0);
    }

    #[test]
    fn test_top_rating_doubles_base_weight() {
        for year in [1990, 2023, 2025] {
            let high = film_weight(&film("a", year, 4.5, &[]), YEAR);
            let low = film_weight(&film("a", year, 3.0, &[]), YEAR);
            assert_eq!(high, 2.0 * low);
        }
    }

    #[test]
    fn test_recency_boost() {
        // Window is reference year minus two, inclusive
        assert!((film_weight(&film("a", 2023, 0.0, &[]), YEAR) - 1.1).abs() < 1e-6);
        assert_eq!(film_weight(&film("a", 2022, 0.0, &[]), YEAR), 1.0);
        assert!((film_weight(&film("a", 2030, 0.0, &[]), YEAR) - 1.1).abs() < 1e-6);
    }

    #[test]
    fn test_single_recent_five_star_film() {
        let analysis = aggregator().analyze(&[film("A", 2024, 5.0, &["Science Fiction"])]);

        assert_eq!(analysis.top_genres.len(), 1);
        let top = &analysis.top_genres[0];
        assert_eq!(top.genre, "Science Fiction");
        assert!((top.weight - 2.2).abs() < 1e-6);
        assert_eq!(top.percentage, 100);
    }

    #[test]
    fn test_weight_is_not_split_across_genres() {
        let analysis = aggregator().analyze(&[film("A", 2000, 4.0, &["Drama", "Crime", "War"])]);
        assert!(analysis.top_genres.iter().all(|g| g.weight == 1.5));
    }

    #[test]
    fn test_genres_are_normalized_before_counting() {
        let analysis = aggregator().analyze(&[
            film("A", 2000, 0.0, &["sci-fi"]),
            film("B", 2000, 0.0, &["Science Fiction"]),
            film("C", 2000, 0.0, &["SCIFI"]),
        ]);

        assert_eq!(analysis.stats.unique_genres, 1);
        assert_eq!(analysis.top_genres[0].genre, "Science Fiction");
        assert_eq!(analysis.top_genres[0].weight, 3.0);
    }

    #[test]
    fn test_ties_keep_first_appearance() {
        let analysis = aggregator().analyze(&[
            film("A", 2000, 4.0, &["Comedy"]),
            film("B", 2000, 4.0, &["Drama"]),
            film("C", 2000, 4.0, &["Drama"]),
            film("D", 2000, 4.0, &["Comedy"]),
        ]);

        let order: Vec<&str> = analysis.top_genres.iter().map(|g| g.genre.as_str()).collect();
        assert_eq!(order, vec!["Comedy", "Drama"]);
        assert_eq!(analysis.top_genres[0].percentage, 50);
    }

    #[test]
    fn test_top_n_and_percentages() {
        let analysis = aggregator().analyze(&[
            film("A", 2000, 0.0, &["Drama", "Comedy", "Horror", "War"]),
            film("B", 2000, 0.0, &["Drama", "Comedy", "Horror"]),
            film("C", 2000, 0.0, &["Drama", "Comedy"]),
            film("D", 2000, 0.0, &["Drama"]),
        ]);

        let genres: Vec<(&str, f32, u32)> = analysis
            .top_genres
            .iter()
            .map(|g| (g.genre.as_str(), g.weight, g.percentage))
            .collect();
        assert_eq!(genres, vec![("Drama", 4.0, 44), ("Comedy", 3.0, 33), ("Horror", 2.0, 22)]);

        // The full ranking still carries every genre
        assert_eq!(analysis.all_genres.len(), 4);
        assert_eq!(analysis.all_genres[3].genre, "War");
    }

    #[test]
    fn test_percentages_sum_near_hundred() {
        let films: Vec<FilmRecord> = (0..30)
            .map(|i| {
                let genres: &[&str] = match i % 4 {
                    0 => &["Drama", "Romance"],
                    1 => &["Thriller"],
                    2 => &["Drama", "Comedy", "Thriller"],
                    _ => &["Horror"],
                };
                film("F", 2000 + i, (i % 11) as f32 / 2.0, genres)
            })
            .collect();

        let analysis = aggregator().analyze(&films);
        let sum: u32 = analysis.top_genres.iter().map(|g| g.percentage).sum();
        assert!((99..=101).contains(&sum), "sum was {}", sum);
    }

    #[test]
    fn test_films_without_genres() {
        let films = vec![
            film("A", 2000, 4.0, &[]),
            film("B", 2000, 0.0, &[]),
        ];
        let analysis = aggregator().analyze(&films);

        assert!(analysis.is_empty());
        assert!(analysis.all_genres.is_empty());
        assert_eq!(analysis.stats.total_films, 2);
        assert_eq!(analysis.stats.total_ratings, 1);
        assert_eq!(analysis.stats.unique_genres, 0);
        let sum: u32 = analysis.top_genres.iter().map(|g| g.percentage).sum();
        assert_eq!(sum, 0);
    }

    #[test]
    fn test_stats() {
        let analysis = aggregator().analyze(&[
            film("A", 2000, 4.5, &["Drama"]),
            film("B", 2000, 0.0, &["Drama"]),
            film("C", 2000, 3.0, &["Comedy"]),
            film("D", 2000, 4.0, &[]),
        ]);

        assert_eq!(
            analysis.stats,
            GenreStats {
                total_films: 4,
                total_ratings: 3,
                // (4.5 + 3.0 + 4.0) / 3 = 3.833...
                avg_rating: 3.8,
                unique_genres: 2,
            }
        );
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let films = vec![
            film("A", 2024, 5.0, &["Science Fiction", "Drama"]),
            film("B", 2010, 3.5, &["drama", "Mystery"]),
        ];
        let aggregator = aggregator();
        assert_eq!(aggregator.analyze(&films), aggregator.analyze(&films));
    }
}
