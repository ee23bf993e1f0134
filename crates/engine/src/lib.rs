//! Engine crate for the film personality analysis.
//!
//! This crate contains the engine that coordinates loading-independent
//! analysis flows, plus the genre enrichment those flows rely on.

pub mod error;
pub mod enrichment;
pub mod cache;
pub mod report;
pub mod orchestrator;

pub use error::EnrichmentError;
pub use enrichment::{BatchEnricher, EnricherConfig, GenreSource, TitleInferenceSource};
pub use cache::{cache_key, CachedGenreSource};
pub use report::{AdvancedReport, Comparison, PersonalityReport};
pub use orchestrator::PersonalityEngine;
