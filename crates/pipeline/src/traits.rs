//! Core traits for archetype scoring.
//!
//! Both scoring paths (the position-weighted affinity scorer and the
//! primary/secondary membership matcher) consume the same input shape,
//! a ranked list of genre signals, and produce per-archetype scores in
//! table order.

use crate::advanced::ScoredGenre;
use crate::aggregator::RankedGenre;
use crate::scoring::ArchetypeScores;

/// A genre and how strongly it shows up in a user's history.
///
/// Position in the slice passed to a scorer is meaningful: the affinity
/// scorer decays signals by rank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenreSignal<'a> {
    pub genre: &'a str,
    pub value: f32,
}

impl<'a> GenreSignal<'a> {
    pub fn new(genre: &'a str, value: f32) -> Self {
        Self { genre, value }
    }
}

impl<'a> From<&'a RankedGenre> for GenreSignal<'a> {
    fn from(ranked: &'a RankedGenre) -> Self {
        Self::new(&ranked.genre, ranked.weight)
    }
}

impl<'a> From<&'a ScoredGenre> for GenreSignal<'a> {
    fn from(scored: &'a ScoredGenre) -> Self {
        Self::new(&scored.genre, scored.score)
    }
}

/// Convert any slice of ranked entries into signals, keeping order
pub fn signals<'a, T>(entries: &'a [T]) -> Vec<GenreSignal<'a>>
where
    &'a T: Into<GenreSignal<'a>>,
{
    entries.iter().map(Into::into).collect()
}

/// Scores all sixteen archetypes against a ranked genre list.
///
/// `Send + Sync` so one scorer instance can be shared by the engine across
/// tasks.
pub trait ArchetypeScorer: Send + Sync {
    /// Returns the name of this scorer (for logging/debugging)
    fn name(&self) -> &str;

    /// Score every archetype. Never fails; unknown genres contribute zero.
    fn score_all(&self, genres: &[GenreSignal<'_>]) -> ArchetypeScores;
}
