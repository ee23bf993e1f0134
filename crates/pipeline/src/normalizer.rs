//! Genre name normalization.
//!
//! Sources spell genres many ways ("sci-fi", "Science-Fiction", "biopic").
//! Scoring tables use one canonical spelling, so every tag goes through
//! [`normalize_genre`] before it is counted.

/// Canonical genre vocabulary known to the scoring tables
pub const CANONICAL_GENRES: [&str; 19] = [
    "Action",
    "Adventure",
    "Animation",
    "Biography",
    "Comedy",
    "Crime",
    "Documentary",
    "Drama",
    "Family",
    "Fantasy",
    "History",
    "Horror",
    "Musical",
    "Mystery",
    "Romance",
    "Science Fiction",
    "Thriller",
    "War",
    "Western",
];

/// Canonical form of a genre, if it is a known synonym.
///
/// Lookup is on the lower-cased, trimmed input.
pub fn canonical_genre(genre: &str) -> Option<&'static str> {
    let key = genre.trim().to_lowercase();
    let canonical = match key.as_str() {
        "sci-fi" | "scifi" | "science-fiction" | "science fiction" => "Science Fiction",
        "rom-com" | "romance" => "Romance",
        "historical" | "history" => "History",
        "documentary" | "docs" => "Documentary",
        "animation" | "animated" => "Animation",
        "thriller" | "suspense" => "Thriller",
        "biography" | "biopic" => "Biography",
        "musical" => "Musical",
        "action" => "Action",
        "horror" => "Horror",
        "comedy" => "Comedy",
        "drama" => "Drama",
        "fantasy" => "Fantasy",
        "war" => "War",
        "western" => "Western",
        "crime" => "Crime",
        "mystery" => "Mystery",
        "adventure" => "Adventure",
        "family" => "Family",
        _ => return None,
    };
    Some(canonical)
}

/// Normalize a raw genre tag.
///
/// Unknown genres come back exactly as given (not lower-cased, not
/// trimmed): the vocabulary is open and an unrecognized tag is its own
/// canonical form.
///
/// Example: " SCI-FI " -> "Science Fiction", "Giallo" -> "Giallo"
pub fn normalize_genre(genre: &str) -> String {
    canonical_genre(genre)
        .map(str::to_string)
        .unwrap_or_else(|| genre.to_string())
}
