//! Loading a whole Letterboxd export directory.
//!
//! An export unpacks into several CSV files. Two of them matter here:
//! - `watched.csv`: every logged film, no ratings
//! - `ratings.csv`: rated films only, with their rating
//!
//! Both are parsed in parallel and merged into one film list.

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::{FilmRecord, Year};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

pub const WATCHED_FILE: &str = "watched.csv";
pub const RATINGS_FILE: &str = "ratings.csv";

/// Load and merge a Letterboxd export directory.
///
/// Steps:
/// 1. Parse `watched.csv` and `ratings.csv` in parallel
/// 2. Keep watched films in file order, taking their rating from
///    `ratings.csv` when title and year match
/// 3. Append rated films that never appeared in `watched.csv`
///
/// A missing file is tolerated as long as the other one loads.
pub fn load_export_dir(data_dir: &Path) -> Result<Vec<FilmRecord>> {
    info!("Loading Letterboxd export from {:?}", data_dir);

    let watched_path = data_dir.join(WATCHED_FILE);
    let ratings_path = data_dir.join(RATINGS_FILE);

    let (watched, ratings) = rayon::join(
        || parser::parse_csv_file(&watched_path),
        || parser::parse_csv_file(&ratings_path),
    );

    let films = match (watched, ratings) {
        (Ok(watched), Ok(ratings)) => merge_ratings(watched, ratings),
        (Ok(watched), Err(DataLoadError::FileNotFound { .. })) => watched,
        (Err(DataLoadError::FileNotFound { .. }), Ok(ratings)) => ratings,
        (Err(DataLoadError::FileNotFound { .. }), Err(DataLoadError::FileNotFound { .. })) => {
            return Err(DataLoadError::FileNotFound {
                path: watched_path.display().to_string(),
            });
        }
        (Err(e), _) | (_, Err(e)) => return Err(e),
    };

    info!("Loaded {} films from export", films.len());
    Ok(films)
}

/// Merge rated films into the watched list
pub fn merge_ratings(watched: Vec<FilmRecord>, ratings: Vec<FilmRecord>) -> Vec<FilmRecord> {
    let mut rating_index: HashMap<(String, Year), usize> = HashMap::new();
    for (idx, film) in ratings.iter().enumerate() {
        rating_index.entry(film_key(film)).or_insert(idx);
    }

    let mut used = vec![false; ratings.len()];
    let mut merged = Vec::with_capacity(watched.len());

    for mut film in watched {
        if let Some(&idx) = rating_index.get(&film_key(&film)) {
            film.rating = ratings[idx].rating;
            used[idx] = true;
        }
        merged.push(film);
    }

    let before = merged.len();
    merged.extend(
        ratings
            .into_iter()
            .zip(used)
            .filter(|(_, used)| !used)
            .map(|(film, _)| film),
    );
    debug!("Appended {} rated films missing from watched list", merged.len() - before);

    merged
}

fn film_key(film: &FilmRecord) -> (String, Year) {
    (film.title.to_lowercase(), film.year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const WATCHED: &str = "Date,Name,Year,Letterboxd URI\n\
                           2024-01-01,The Matrix,1999,https://boxd.it/a\n\
                           2024-01-02,Paterson,2016,https://boxd.it/b\n";

    const RATINGS: &str = "Date,Name,Year,Letterboxd URI,Rating\n\
                           2024-01-03,the matrix,1999,https://boxd.it/a,5\n\
                           2024-01-04,Heat,1995,https://boxd.it/c,4\n";

    #[test]
    fn test_merge_ratings() {
        let watched = parser::parse_csv(WATCHED).unwrap();
        let ratings = parser::parse_csv(RATINGS).unwrap();

        let merged = merge_ratings(watched, ratings);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].title, "The Matrix");
        assert_eq!(merged[0].rating, 5.0);
        assert_eq!(merged[1].title, "Paterson");
        assert_eq!(merged[1].rating, 0.0);
        assert_eq!(merged[2].title, "Heat");
        assert_eq!(merged[2].rating, 4.0);
    }

    #[test]
    fn test_load_export_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(WATCHED_FILE), WATCHED).unwrap();
        fs::write(dir.path().join(RATINGS_FILE), RATINGS).unwrap();

        let films = load_export_dir(dir.path()).unwrap();
        assert_eq!(films.len(), 3);
    }

    #[test]
    fn test_load_export_dir_ratings_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(RATINGS_FILE), RATINGS).unwrap();

        let films = load_export_dir(dir.path()).unwrap();
        assert_eq!(films.len(), 2);
        assert!(films.iter().all(|f| f.is_rated()));
    }

    #[test]
    fn test_load_export_dir_empty() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_export_dir(dir.path());
        assert!(matches!(result, Err(DataLoadError::FileNotFound { .. })));
    }
}
