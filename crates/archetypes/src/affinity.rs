//! Genre affinity table for the primary scoring path.
//!
//! Maps a canonical genre to the archetypes it points toward, each with an
//! integer weight. Genres not listed here carry no affinity signal.
//!
//! This table is independent of each archetype's primary/secondary genre
//! lists, and the two can disagree.

use crate::types::ArchetypeCode;
use crate::types::ArchetypeCode::*;

/// One archetype's affinity for a genre
pub type Affinity = (ArchetypeCode, u32);

/// Genres that have an affinity row, in table order
pub const AFFINITY_GENRES: [&str; 19] = [
    "Science Fiction",
    "Thriller",
    "Mystery",
    "Drama",
    "Romance",
    "Fantasy",
    "Action",
    "Comedy",
    "Horror",
    "War",
    "History",
    "Biography",
    "Documentary",
    "Crime",
    "Animation",
    "Musical",
    "Adventure",
    "Western",
    "Family",
];

/// Affinities of a canonical genre; empty for untabulated genres.
///
/// Matching is exact: callers normalize genres first.
pub fn genre_affinities(genre: &str) -> &'static [Affinity] {
    match genre {
        "Science Fiction" => &[(Intj, 10), (Intp, 10), (Entp, 8), (Istp, 7), (Infj, 6), (Enfp, 5)],
        "Thriller" => &[(Intj, 9), (Estj, 9), (Intp, 8), (Istp, 8), (Entj, 7), (Estp, 7), (Entp, 6)],
        "Mystery" => &[(Intj, 10), (Intp, 8), (Infj, 6), (Entp, 6), (Istp, 5)],
        "Drama" => &[(Infj, 10), (Infp, 10), (Intp, 8), (Enfj, 8), (Isfj, 7), (Esfj, 7), (Isfp, 6)],
        "Romance" => &[(Infp, 10), (Infj, 8), (Isfj, 9), (Esfj, 8), (Isfp, 7), (Enfp, 6)],
        "Fantasy" => &[(Infj, 9), (Infp, 9), (Enfp, 9), (Isfp, 8), (Intj, 5)],
        "Action" => &[(Estp, 10), (Estj, 9), (Istp, 10), (Entj, 8), (Entp, 5)],
        "Comedy" => &[(Entp, 9), (Enfp, 9), (Esfp, 10), (Esfj, 9), (Estp, 6)],
        "Horror" => &[(Estp, 9), (Istp, 6), (Intp, 5)],
        "War" => &[(Entj, 10), (Istj, 9), (Estj, 8), (Istp, 6)],
        "History" => &[(Entj, 8), (Istj, 10), (Enfj, 7), (Estj, 8)],
        "Biography" => &[(Enfj, 9), (Istj, 7), (Entj, 6), (Infj, 6)],
        "Documentary" => &[(Intp, 9), (Infj, 7), (Istj, 6), (Enfj, 6)],
        "Crime" => &[(Entj, 8), (Estj, 9), (Entp, 8), (Istj, 7), (Istp, 7)],
        "Animation" => &[(Infp, 10), (Infj, 8), (Isfp, 10), (Enfp, 8), (Esfp, 7)],
        "Musical" => &[(Enfj, 9), (Esfp, 10), (Esfj, 8), (Enfp, 7), (Isfp, 6)],
        "Adventure" => &[(Enfp, 10), (Esfp, 9), (Estp, 8), (Istp, 7), (Entp, 6)],
        "Western" => &[(Istj, 10), (Istp, 7), (Estj, 6)],
        "Family" => &[(Isfj, 10), (Esfj, 9), (Enfj, 6)],
        _ => &[],
    }
}

/// Affinity of one archetype for one genre (0 when untabulated)
pub fn affinity(genre: &str, code: ArchetypeCode) -> u32 {
    genre_affinities(genre)
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, weight)| *weight)
        .unwrap_or(0)
}
