//! Archetype scoring.
//!
//! - **affinity**: position-weighted genre affinity sum, one winner
//! - **membership**: primary/secondary genre membership, full ranking

pub mod affinity;
pub mod membership;

pub use affinity::{classify, classify_signals, AffinityScorer};
pub use membership::{rank_all, MembershipScorer};

use archetypes::{archetype, Archetype, ArchetypeCode};
use serde::{Deserialize, Serialize};

/// One archetype's score in a ranking
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeScore {
    pub code: ArchetypeCode,
    pub score: f32,
}

impl ArchetypeScore {
    /// Full archetype record for this entry
    pub fn archetype(&self) -> &'static Archetype {
        archetype(self.code)
    }
}

/// Per-archetype score accumulator, indexed in table order
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ArchetypeScores([f32; 16]);

impl ArchetypeScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, code: ArchetypeCode, amount: f32) {
        self.0[code.index()] += amount;
    }

    pub fn get(&self, code: ArchetypeCode) -> f32 {
        self.0[code.index()]
    }

    /// True when no archetype received any score
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|s| *s == 0.0)
    }

    /// Scores in table order
    pub fn iter(&self) -> impl Iterator<Item = ArchetypeScore> + '_ {
        ArchetypeCode::ALL.iter().map(|&code| ArchetypeScore {
            code,
            score: self.get(code),
        })
    }

    /// All sixteen entries, descending. Equal scores keep table order.
    pub fn ranked(&self) -> Vec<ArchetypeScore> {
        let mut ranked: Vec<ArchetypeScore> = self.iter().collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }

    /// Strictly highest-scoring archetype; the earliest in table order wins
    /// ties. `None` when nothing scored above zero.
    pub fn best(&self) -> Option<ArchetypeCode> {
        let mut best: Option<(ArchetypeCode, f32)> = None;
        for entry in self.iter() {
            if entry.score <= 0.0 {
                continue;
            }
            match best {
                Some((_, top)) if entry.score <= top => {}
                _ => best = Some((entry.code, entry.score)),
            }
        }
        best.map(|(code, _)| code)
    }
}
