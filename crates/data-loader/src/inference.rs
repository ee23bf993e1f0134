//! Title-based genre inference.
//!
//! Used when a loader has a title but no genre data (CSV exports carry none).
//! Plain keyword matching against a fixed dictionary, checked in order.

use crate::types::{FALLBACK_GENRE, UNKNOWN_GENRE};

/// Keyword dictionary, one entry per canonical genre, in match order
const TITLE_PATTERNS: &[(&str, &[&str])] = &[
    (
        "Science Fiction",
        &[
            "star wars", "star trek", "blade runner", "matrix", "alien", "terminator",
            "interstellar", "arrival", "dune", "inception",
        ],
    ),
    (
        "Horror",
        &[
            "horror", "nightmare", "halloween", "scream", "conjuring", "exorcist", "saw",
            "shining", "thing", "witch",
        ],
    ),
    (
        "Romance",
        &[
            "love", "heart", "wedding", "valentine", "notebook", "romantic", "pride",
            "sunrise", "lalaland", "titanic",
        ],
    ),
    (
        "Comedy",
        &["funny", "laugh", "comedy", "trip", "hangover", "superbad", "mean girls", "barbie"],
    ),
    (
        "Action",
        &[
            "die hard", "mission", "john wick", "mad max", "furious", "avengers", "batman",
            "dark knight", "gladiator", "top gun",
        ],
    ),
    (
        "Animation",
        &[
            "toy story", "spirited away", "nemo", "frozen", "moana", "shrek", "spider-verse",
            "ghibli", "totoro", "coco", "inside out",
        ],
    ),
    (
        "War",
        &["war", "soldier", "battle", "platoon", "saving private", "apocalypse", "dunkirk", "1917"],
    ),
    (
        "Western",
        &["western", "cowboy", "unforgiven", "django", "good bad ugly", "no country"],
    ),
    (
        "Crime",
        &[
            "godfather", "goodfellas", "scarface", "departed", "pulp fiction", "irishman", "heat",
            "casino", "seven",
        ],
    ),
    (
        "Thriller",
        &[
            "gone girl", "silence", "seven", "zodiac", "parasite", "joker", "shutter island",
            "prisoners",
        ],
    ),
];

/// Infer genres from a film title.
///
/// Every dictionary genre with at least one keyword contained in the
/// lower-cased title is returned, in dictionary order. A couple of well-known
/// titles are special-cased when no keyword hits. An empty title yields
/// nothing.
///
/// Example: "Seven Samurai" -> ["Crime", "Thriller"]
pub fn infer_genres(title: &str) -> Vec<String> {
    if title.is_empty() {
        return Vec::new();
    }
    let title_lower = title.to_lowercase();

    let genres: Vec<String> = TITLE_PATTERNS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| title_lower.contains(k)))
        .map(|(genre, _)| genre.to_string())
        .collect();

    if !genres.is_empty() {
        return genres;
    }

    if title_lower.contains("fight club") {
        vec!["Drama".to_string(), "Thriller".to_string()]
    } else if title_lower.contains("shawshank") {
        vec!["Drama".to_string()]
    } else {
        Vec::new()
    }
}

/// Like [`infer_genres`], but never empty: unknown titles get
/// `["Drama", "Unknown"]` so they still take part in scoring.
pub fn infer_or_fallback(title: &str) -> Vec<String> {
    let genres = infer_genres(title);
    if genres.is_empty() {
        vec![FALLBACK_GENRE.to_string(), UNKNOWN_GENRE.to_string()]
    } else {
        genres
    }
}
