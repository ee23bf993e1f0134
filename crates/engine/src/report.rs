//! Analysis results handed to front ends.

use archetypes::{Archetype, ArchetypeCode};
use pipeline::{AdvancedStats, ArchetypeScore, GenreStats, GenreWeight, RankedGenre, ScoredGenre};
use serde::Serialize;

/// Result of the quick analysis flow
#[derive(Debug, Clone, Serialize)]
pub struct PersonalityReport {
    /// Winner of the affinity scorer
    pub archetype: &'static Archetype,
    pub top_genres: Vec<RankedGenre>,
    pub all_genres: Vec<GenreWeight>,
    pub stats: GenreStats,
    /// All sixteen archetypes from the membership matcher, best first
    pub matches: Vec<ArchetypeScore>,
}

/// Result of the advanced (enriched) analysis flow
#[derive(Debug, Clone, Serialize)]
pub struct AdvancedReport {
    /// First entry of `matches`
    pub archetype: &'static Archetype,
    pub top_genres: Vec<ScoredGenre>,
    pub stats: AdvancedStats,
    pub matches: Vec<ArchetypeScore>,
    /// Present when the user reported their own code
    pub comparison: Option<Comparison>,
}

/// Self-reported code versus the inferred one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Comparison {
    Aligned { code: ArchetypeCode },
    Contrast {
        actual: ArchetypeCode,
        inferred: ArchetypeCode,
    },
}

impl Comparison {
    pub fn new(actual: ArchetypeCode, inferred: ArchetypeCode) -> Self {
        if actual == inferred {
            Comparison::Aligned { code: actual }
        } else {
            Comparison::Contrast { actual, inferred }
        }
    }

    pub fn is_aligned(&self) -> bool {
        matches!(self, Comparison::Aligned { .. })
    }
}
