//! Errors surfaced by the analysis pipeline.
//!
//! Individual film records never produce errors; only the aggregate outcome
//! can.

use archetypes::UnknownArchetype;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// No genre was observed in the whole film list, so there is nothing to
    /// classify
    #[error("Unable to analyze genres: not enough data")]
    InsufficientData,

    /// A self-reported code did not parse
    #[error(transparent)]
    UnknownArchetype(#[from] UnknownArchetype),
}
