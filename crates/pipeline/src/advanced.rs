//! Rating-driven genre scorer for the advanced flow.
//!
//! Where the aggregator rewards volume and recency, this scorer ranks genres
//! by how well the user rated them:
//!
//! ```text
//! avg    = rating_sum / rated_count      (0.5 if no film in the genre is rated)
//! volume = count / 1000
//! top4   = 0.25 if a favourite film carries the genre, else 0
//! score  = avg * (1 + volume + top4)
//! ```

use crate::aggregator::round1;
use crate::normalizer::normalize_genre;
use crate::tally::GenreTally;
use data_loader::FilmRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Average assigned to a genre none of whose films is rated
pub const UNRATED_BASELINE: f32 = 0.5;
/// Bonus for genres of the user's favourite films
pub const TOP4_BONUS: f32 = 0.25;
/// Films needed for a +1.0 volume multiplier
pub const VOLUME_SCALE: f32 = 1000.0;

/// Multiplier breakdown of a [`ScoredGenre`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreMultipliers {
    pub volume: f32,
    pub top4: f32,
    pub total: f32,
}

/// One genre in the advanced ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredGenre {
    pub genre: String,
    /// Films carrying the genre
    pub count: usize,
    pub avg_rating: f32,
    /// Rounded to two decimals
    pub score: f32,
    /// Share of the summed scores over all genres, one decimal
    pub percentage: f32,
    pub multipliers: ScoreMultipliers,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvancedStats {
    /// Films with at least one genre
    pub total_films: usize,
    /// All input films
    pub processed: usize,
    /// Rated films with at least one genre
    pub total_ratings: usize,
    /// Mean over every rated input film, one decimal
    pub avg_rating: f32,
    pub unique_genres: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvancedAnalysis {
    pub genres: Vec<ScoredGenre>,
    pub stats: AdvancedStats,
}

impl AdvancedAnalysis {
    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct GenreAccumulator {
    count: usize,
    rating_sum: f32,
    rated_count: usize,
}

/// Scores genres by average rating with volume and favourite bonuses
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvancedAnalyzer;

impl AdvancedAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Score the genres of `films`.
    ///
    /// `favourite_genres` are the genres of the user's pinned films; they are
    /// normalized here so raw tags can be passed straight through.
    pub fn analyze<S: AsRef<str>>(
        &self,
        films: &[FilmRecord],
        favourite_genres: &[S],
    ) -> AdvancedAnalysis {
        let mut tally: GenreTally<GenreAccumulator> = GenreTally::new();
        let mut total_films = 0;
        let mut total_ratings = 0;

        for film in films.iter().filter(|f| f.has_genres()) {
            total_films += 1;
            if film.is_rated() {
                total_ratings += 1;
            }
            for genre in &film.genres {
                let acc = tally.entry(normalize_genre(genre));
                acc.count += 1;
                if film.is_rated() {
                    acc.rating_sum += film.rating;
                    acc.rated_count += 1;
                }
            }
        }

        let favourites: HashSet<String> = favourite_genres
            .iter()
            .map(|g| normalize_genre(g.as_ref()))
            .collect();
        debug!("Favourite genre bonus targets: {:?}", favourites);

        let unique_genres = tally.len();
        let mut scored: Vec<(String, usize, f32, f32, ScoreMultipliers)> = tally
            .into_entries()
            .into_iter()
            .map(|(genre, acc)| {
                let avg = if acc.rated_count > 0 {
                    acc.rating_sum / acc.rated_count as f32
                } else {
                    UNRATED_BASELINE
                };
                let volume = acc.count as f32 / VOLUME_SCALE;
                let top4 = if favourites.contains(&genre) { TOP4_BONUS } else { 0.0 };
                let total = 1.0 + volume + top4;
                (genre, acc.count, avg, avg * total, ScoreMultipliers { volume, top4, total })
            })
            .collect();

        scored.sort_by(|a, b| b.3.total_cmp(&a.3));

        let total_score: f32 = scored.iter().map(|s| s.3).sum();
        let genres = scored
            .into_iter()
            .map(|(genre, count, avg_rating, score, multipliers)| ScoredGenre {
                genre,
                count,
                avg_rating,
                score: round2(score),
                percentage: if total_score > 0.0 {
                    round1(score / total_score * 100.0)
                } else {
                    0.0
                },
                multipliers,
            })
            .collect();

        AdvancedAnalysis {
            genres,
            stats: AdvancedStats {
                total_films,
                processed: films.len(),
                total_ratings,
                avg_rating: mean_rating(films),
                unique_genres,
            },
        }
    }
}

fn mean_rating(films: &[FilmRecord]) -> f32 {
    let (sum, count) = films
        .iter()
        .filter(|f| f.is_rated())
        .fold((0.0f32, 0usize), |(sum, count), f| (sum + f.rating, count + 1));
    if count == 0 {
        0.0
    } else {
        round1(sum / count as f32)
    }
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn film(title: &str, rating: f32, genres: &[&str]) -> FilmRecord {
        FilmRecord::with_genres(title, 2010, rating, genres)
    }

    const NO_FAVOURITES: &[&str] = &[];

    #[test]
    fn test_average_rating_drives_score() {
        let analysis = AdvancedAnalyzer::new().analyze(
            &[
                film("A", 5.0, &["Horror"]),
                film("B", 3.0, &["Horror"]),
                film("C", 2.0, &["Comedy"]),
            ],
            NO_FAVOURITES,
        );

        let horror = &analysis.genres[0];
        assert_eq!(horror.genre, "Horror");
        assert_eq!(horror.count, 2);
        assert_eq!(horror.avg_rating, 4.0);
        // 4.0 * (1 + 2/1000)
        assert_eq!(horror.score, 4.01);
        assert_eq!(horror.multipliers.volume, 0.002);

        let comedy = &analysis.genres[1];
        assert_eq!(comedy.score, 2.0);
    }

    #[test]
    fn test_unrated_genre_gets_baseline() {
        let analysis = AdvancedAnalyzer::new().analyze(&[film("A", 0.0, &["War"])], NO_FAVOURITES);
        assert_eq!(analysis.genres[0].avg_rating, UNRATED_BASELINE);
        assert!((analysis.genres[0].score - 0.5).abs() < 0.011);
        assert_eq!(analysis.genres[0].percentage, 100.0);
    }

    #[test]
    fn test_favourite_bonus_is_normalized() {
        let analysis = AdvancedAnalyzer::new().analyze(
            &[film("A", 4.0, &["Science Fiction"]), film("B", 4.0, &["Drama"])],
            &["sci-fi"],
        );

        let top = &analysis.genres[0];
        assert_eq!(top.genre, "Science Fiction");
        assert_eq!(top.multipliers.top4, TOP4_BONUS);
        assert_eq!(top.score, 5.0);
        assert_eq!(analysis.genres[1].multipliers.top4, 0.0);
    }

    #[test]
    fn test_ties_keep_first_appearance() {
        let analysis = AdvancedAnalyzer::new().analyze(
            &[film("A", 3.0, &["Comedy", "Drama"])],
            NO_FAVOURITES,
        );
        let order: Vec<&str> = analysis.genres.iter().map(|g| g.genre.as_str()).collect();
        assert_eq!(order, vec!["Comedy", "Drama"]);
        assert_eq!(analysis.genres[0].percentage, 50.0);
    }

    #[test]
    fn test_stats() {
        let analysis = AdvancedAnalyzer::new().analyze(
            &[
                film("A", 4.0, &["Drama"]),
                film("B", 0.0, &["Drama"]),
                film("C", 3.0, &[]),
            ],
            NO_FAVOURITES,
        );

        assert_eq!(
            analysis.stats,
            AdvancedStats {
                total_films: 2,
                processed: 3,
                total_ratings: 1,
                avg_rating: 3.5,
                unique_genres: 1,
            }
        );
    }

    #[test]
    fn test_no_genres() {
        let analysis = AdvancedAnalyzer::new().analyze(&[film("A", 4.0, &[])], NO_FAVOURITES);
        assert!(analysis.is_empty());
        assert_eq!(analysis.stats.unique_genres, 0);
    }
}
