//! Genre analysis and archetype scoring for film histories.
//!
//! This crate provides:
//! - Genre normalization to a canonical vocabulary
//! - GenreAggregator for weighted genre rankings and viewing stats
//! - ArchetypeScorer trait with two implementations (affinity, membership)
//! - AdvancedAnalyzer for the rating-driven genre ranking
//!
//! ## Architecture
//! The analysis runs in stages:
//! 1. Every genre tag is normalized
//! 2. Films are aggregated into weighted genres (or scored by the advanced
//!    analyzer)
//! 3. The ranked genres are turned into archetype scores
//!
//! Everything here is synchronous and keeps no state between calls.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{analyze_genres, classify, rank_all, signals};
//!
//! let analysis = analyze_genres(&films);
//! let archetype = classify(&analysis.top_genres)?;
//! let matches = rank_all(&signals(&analysis.top_genres));
//! ```

pub mod error;
pub mod normalizer;
mod tally;
pub mod aggregator;
pub mod traits;
pub mod scoring;
pub mod advanced;

// Re-export main types
pub use error::AnalysisError;
pub use normalizer::{canonical_genre, normalize_genre, CANONICAL_GENRES};
pub use aggregator::{
    analyze_genres, film_weight, AggregatorConfig, GenreAggregator, GenreAnalysis, GenreStats,
    GenreWeight, RankedGenre,
};
pub use traits::{signals, ArchetypeScorer, GenreSignal};
pub use scoring::{
    classify, classify_signals, rank_all, AffinityScorer, ArchetypeScore, ArchetypeScores,
    MembershipScorer,
};
pub use advanced::{AdvancedAnalysis, AdvancedAnalyzer, AdvancedStats, ScoreMultipliers, ScoredGenre};
