//! Built-in demo profiles.
//!
//! Three hand-picked film histories with real genre data, used to try the
//! analysis without an export and as fixtures in tests and benchmarks.

use crate::types::{FilmHistory, FilmRecord, Year};

/// `(title, year, rating, genres)`
type DemoFilm = (&'static str, Year, f32, &'static [&'static str]);

/// A demo profile in static form
#[derive(Debug)]
pub struct DemoUser {
    pub username: &'static str,
    pub display_name: &'static str,
    pub films: &'static [DemoFilm],
}

impl DemoUser {
    /// Materialize the profile as a regular film history
    pub fn to_history(&self) -> FilmHistory {
        let films = self
            .films
            .iter()
            .map(|&(title, year, rating, genres)| FilmRecord::with_genres(title, year, rating, genres))
            .collect();

        FilmHistory {
            username: self.username.to_string(),
            display_name: self.display_name.to_string(),
            films,
        }
    }
}

pub static DEMO_USERS: &[DemoUser] = &[
    DemoUser {
        username: "cinephile123",
        display_name: "Alex Chen",
        films: &[
            ("Blade Runner 2049", 2017, 5.0, &["Science Fiction", "Thriller"]),
            ("Arrival", 2016, 5.0, &["Science Fiction", "Drama"]),
            ("Dune", 2021, 4.5, &["Science Fiction", "Adventure"]),
            ("Interstellar", 2014, 5.0, &["Science Fiction", "Drama"]),
            ("The Dark Knight", 2008, 5.0, &["Action", "Crime", "Thriller"]),
            ("Inception", 2010, 5.0, &["Science Fiction", "Thriller"]),
            ("Prisoners", 2013, 4.5, &["Thriller", "Crime", "Mystery"]),
            ("Sicario", 2015, 4.5, &["Thriller", "Crime", "Drama"]),
            ("Memento", 2000, 4.5, &["Thriller", "Mystery"]),
            ("The Prestige", 2006, 4.5, &["Mystery", "Thriller", "Drama"]),
            ("Shutter Island", 2010, 4.0, &["Thriller", "Mystery"]),
            ("Gone Girl", 2014, 4.5, &["Thriller", "Mystery", "Drama"]),
            ("Zodiac", 2007, 4.0, &["Crime", "Mystery", "Thriller"]),
            ("The Matrix", 1999, 5.0, &["Science Fiction", "Action"]),
            ("Ex Machina", 2014, 4.0, &["Science Fiction", "Thriller"]),
        ],
    },
    DemoUser {
        username: "dreamweaver",
        display_name: "Luna Martinez",
        films: &[
            ("Spirited Away", 2001, 5.0, &["Animation", "Fantasy", "Adventure"]),
            ("Your Name", 2016, 5.0, &["Animation", "Romance", "Fantasy"]),
            ("The Grand Budapest Hotel", 2014, 4.5, &["Comedy", "Drama"]),
            ("Amélie", 2001, 5.0, &["Romance", "Comedy", "Drama"]),
            ("Eternal Sunshine", 2004, 5.0, &["Romance", "Drama", "Science Fiction"]),
            ("La La Land", 2016, 4.0, &["Romance", "Musical", "Drama"]),
            ("Call Me By Your Name", 2017, 5.0, &["Romance", "Drama"]),
            ("Portrait of a Lady on Fire", 2019, 5.0, &["Romance", "Drama"]),
            ("Moonrise Kingdom", 2012, 4.5, &["Adventure", "Comedy", "Romance"]),
            ("The Shape of Water", 2017, 4.0, &["Fantasy", "Romance", "Drama"]),
            ("Pan's Labyrinth", 2006, 5.0, &["Fantasy", "Drama"]),
            ("Howl's Moving Castle", 2004, 5.0, &["Animation", "Fantasy", "Adventure"]),
            ("Coco", 2017, 4.5, &["Animation", "Fantasy", "Family"]),
            ("Before Sunrise", 1995, 4.5, &["Romance", "Drama"]),
            ("Little Women", 2019, 4.5, &["Drama", "Romance"]),
        ],
    },
    DemoUser {
        username: "actionjunkie",
        display_name: "Marcus Steel",
        films: &[
            ("Mad Max: Fury Road", 2015, 5.0, &["Action", "Adventure", "Science Fiction"]),
            ("John Wick", 2014, 5.0, &["Action", "Thriller"]),
            ("The Raid", 2011, 5.0, &["Action", "Thriller"]),
            ("Mission Impossible: Fallout", 2018, 4.5, &["Action", "Thriller", "Adventure"]),
            ("Top Gun: Maverick", 2022, 4.5, &["Action", "Drama"]),
            ("Casino Royale", 2006, 4.5, &["Action", "Thriller", "Adventure"]),
            ("Heat", 1995, 5.0, &["Crime", "Action", "Thriller"]),
            ("Die Hard", 1988, 4.5, &["Action", "Thriller"]),
            ("The Dark Knight", 2008, 5.0, &["Action", "Crime", "Thriller"]),
            ("Terminator 2", 1991, 5.0, &["Action", "Science Fiction"]),
            ("Edge of Tomorrow", 2014, 4.0, &["Action", "Science Fiction"]),
            ("The Matrix", 1999, 5.0, &["Science Fiction", "Action"]),
            ("Kill Bill", 2003, 4.5, &["Action", "Thriller"]),
            ("Skyfall", 2012, 4.0, &["Action", "Thriller", "Adventure"]),
            ("Baby Driver", 2017, 4.5, &["Action", "Crime", "Thriller"]),
        ],
    },
];

/// Usernames of all demo profiles, in declaration order
pub fn demo_usernames() -> Vec<&'static str> {
    DEMO_USERS.iter().map(|u| u.username).collect()
}

/// Look up a demo profile by username (case-insensitive)
pub fn find_demo_user(username: &str) -> Option<&'static DemoUser> {
    let wanted = username.trim().to_lowercase();
    DEMO_USERS.iter().find(|u| u.username == wanted)
}

/// Film history of a demo profile, if `username` names one
pub fn demo_history(username: &str) -> Option<FilmHistory> {
    find_demo_user(username).map(DemoUser::to_history)
}
