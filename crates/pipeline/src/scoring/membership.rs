//! Primary/secondary membership matcher.
//!
//! Each archetype lists the genres that define it. A genre in the primary
//! list adds its full value, one in the secondary list adds half. Unlike the
//! affinity scorer every input genre counts, whatever its rank.

use crate::scoring::{ArchetypeScore, ArchetypeScores};
use crate::traits::{ArchetypeScorer, GenreSignal};
use archetypes::ARCHETYPES;

pub const PRIMARY_FACTOR: f32 = 1.0;
pub const SECONDARY_FACTOR: f32 = 0.5;

/// Scores archetypes by genre list membership
#[derive(Debug, Clone, Copy, Default)]
pub struct MembershipScorer;

impl ArchetypeScorer for MembershipScorer {
    fn name(&self) -> &str {
        "MembershipScorer"
    }

    fn score_all(&self, genres: &[GenreSignal<'_>]) -> ArchetypeScores {
        let mut scores = ArchetypeScores::new();

        for archetype in ARCHETYPES.iter() {
            for signal in genres {
                if archetype.is_primary(signal.genre) {
                    scores.add(archetype.code, signal.value * PRIMARY_FACTOR);
                } else if archetype.is_secondary(signal.genre) {
                    scores.add(archetype.code, signal.value * SECONDARY_FACTOR);
                }
            }
        }

        scores
    }
}

/// Rank all sixteen archetypes, best first.
///
/// Always returns sixteen entries; with no signal they are all zero and in
/// table order.
pub fn rank_all(genres: &[GenreSignal<'_>]) -> Vec<ArchetypeScore> {
    MembershipScorer.score_all(genres).ranked()
}
