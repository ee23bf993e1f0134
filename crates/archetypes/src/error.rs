use thiserror::Error;

/// Text that is not one of the sixteen archetype codes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown archetype code: {0}")]
pub struct UnknownArchetype(pub String);
