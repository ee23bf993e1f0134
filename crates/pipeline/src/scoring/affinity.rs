//! Position-weighted affinity scorer.
//!
//! For the genre at rank `i` (0-based) the multiplier is `3 - i`, floored
//! at zero, so only the top three genres matter:
//!
//! ```text
//! score[code] += affinity(genre, code) * multiplier * weight
//! ```

use crate::aggregator::RankedGenre;
use crate::error::AnalysisError;
use crate::scoring::ArchetypeScores;
use crate::traits::{signals, ArchetypeScorer, GenreSignal};
use archetypes::{archetype, default_archetype, genre_affinities, Archetype};
use tracing::debug;

/// Multiplier of the top-ranked genre
pub const TOP_MULTIPLIER: u32 = 3;

/// Rank decay for the genre at `position`
pub fn position_multiplier(position: usize) -> u32 {
    let position = u32::try_from(position).unwrap_or(u32::MAX);
    TOP_MULTIPLIER.saturating_sub(position)
}

/// Scores archetypes from the static genre affinity table
#[derive(Debug, Clone, Copy, Default)]
pub struct AffinityScorer;

impl ArchetypeScorer for AffinityScorer {
    fn name(&self) -> &str {
        "AffinityScorer"
    }

    fn score_all(&self, genres: &[GenreSignal<'_>]) -> ArchetypeScores {
        let mut scores = ArchetypeScores::new();

        for (position, signal) in genres.iter().enumerate() {
            let multiplier = position_multiplier(position);
            if multiplier == 0 {
                break;
            }
            for &(code, affinity) in genre_affinities(signal.genre) {
                scores.add(code, (affinity * multiplier) as f32 * signal.value);
            }
        }

        scores
    }
}

/// Pick one archetype for a ranked top-genre list.
///
/// Fails only on an empty list. A list whose genres have no affinity at all
/// falls back to the default archetype.
pub fn classify(top_genres: &[RankedGenre]) -> Result<&'static Archetype, AnalysisError> {
    classify_signals(&signals(top_genres))
}

/// [`classify`] over pre-built signals
pub fn classify_signals(genres: &[GenreSignal<'_>]) -> Result<&'static Archetype, AnalysisError> {
    if genres.is_empty() {
        return Err(AnalysisError::InsufficientData);
    }

    let scores = AffinityScorer.score_all(genres);
    let chosen = match scores.best() {
        Some(code) => archetype(code),
        None => {
            debug!("No affinity signal in {} genres, using default archetype", genres.len());
            default_archetype()
        }
    };

    debug!("Classified as {} ({})", chosen.code, chosen.name);
    Ok(chosen)
}
