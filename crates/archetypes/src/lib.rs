//! # Archetypes Crate
//!
//! Static reference data for the film personality engine:
//!
//! - **types**: `ArchetypeCode` (16 codes in table order), `Temperament`,
//!   and the `Archetype` record
//! - **catalog**: the sixteen archetype records and the default fallback
//! - **affinity**: genre → archetype affinity weights used by the primary
//!   scorer
//!
//! Nothing here is mutated at runtime. Tables are plain `static` data and
//! `match` lookups, so there is no initialization step.
//!
//! ## Example Usage
//!
//! ```ignore
//! use archetypes::{archetype, genre_affinities, ArchetypeCode};
//!
//! let visionary = archetype(ArchetypeCode::Infj);
//! println!("{} {}", visionary.icon, visionary.name);
//!
//! for (code, weight) in genre_affinities("Science Fiction") {
//!     println!("{code}: {weight}");
//! }
//! ```

pub mod error;
pub mod types;
pub mod catalog;
pub mod affinity;

// Re-export commonly used items
pub use error::UnknownArchetype;
pub use types::{Archetype, ArchetypeCode, Temperament};
pub use catalog::{archetype, default_archetype, ARCHETYPES, DEFAULT_ARCHETYPE};
pub use affinity::{affinity, genre_affinities, Affinity, AFFINITY_GENRES};
