//! Parser for Letterboxd CSV exports.
//!
//! Letterboxd exports (`watched.csv`, `ratings.csv`, `diary.csv`, ...) share a
//! loose layout: `Date,Name,Year,Letterboxd URI[,Rating]`. Users also hand in
//! hand-made files, so columns are located by header name first and by
//! position as a fallback.
//!
//! Rows are parsed best-effort: a bad year or rating falls back to its
//! default, a row without a title is skipped. Only a file with no usable rows
//! at all is an error.

use crate::error::{DataLoadError, Result};
use crate::inference::infer_or_fallback;
use crate::types::{DEFAULT_YEAR, FilmRecord, Year};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

const BOM: char = '\u{FEFF}';

/// Column positions used to read rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub name: usize,
    pub year: Option<usize>,
    pub rating: Option<usize>,
}

impl ColumnLayout {
    /// Locate columns from the header cells.
    ///
    /// Headers are compared lower-cased and trimmed: the name column is the
    /// first containing "name" or "title", year the first containing "year",
    /// rating the first containing "rating". Without a name column the file
    /// is assumed to be `Name, Year, URI, Rating` (or `Name, Year, Rating`
    /// when it only has three columns).
    pub fn detect(headers: &[String]) -> Self {
        let clean: Vec<String> = headers.iter().map(|h| h.to_lowercase().trim().to_string()).collect();

        let name = clean.iter().position(|h| h.contains("name") || h.contains("title"));
        let year = clean.iter().position(|h| h.contains("year"));
        let rating = clean.iter().position(|h| h.contains("rating"));

        match name {
            Some(name) => Self { name, year, rating },
            None => {
                warn!("Headers not detected, using default column indices");
                Self {
                    name: 0,
                    year: Some(1),
                    rating: Some(if headers.len() == 3 { 2 } else { 3 }),
                }
            }
        }
    }
}

/// Parse a CSV export held in memory.
///
/// Genres are inferred from titles since exports carry none; films the
/// dictionary knows nothing about get the `["Drama", "Unknown"]` fallback.
pub fn parse_csv(content: &str) -> Result<Vec<FilmRecord>> {
    let content = content.strip_prefix(BOM).unwrap_or(content);

    // A trailing newline leaves an empty last line, which still counts
    let lines: Vec<&str> = content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    if lines.len() < 2 {
        return Err(DataLoadError::EmptyFile);
    }

    let headers = parse_csv_line(lines[0]);
    let layout = ColumnLayout::detect(&headers);
    debug!(?headers, ?layout, "Detected CSV layout");

    let mut films = Vec::new();

    for line in &lines[1..] {
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() {
            continue; // Skip empty lines
        }

        let values = parse_csv_line(line_trimmed);
        if let Some(film) = parse_row(&values, layout) {
            films.push(film);
        }
    }

    debug!("Parsed {} films", films.len());

    if films.is_empty() {
        return Err(DataLoadError::NoFilms { headers });
    }

    Ok(films)
}

/// Read and parse a CSV export from disk
pub fn parse_csv_file(path: &Path) -> Result<Vec<FilmRecord>> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let content = fs::read_to_string(path)?;
    parse_csv(&content)
}

/// Turn one row into a film, or `None` when it has no title
fn parse_row(values: &[String], layout: ColumnLayout) -> Option<FilmRecord> {
    let title = values.get(layout.name)?;
    if title.is_empty() {
        return None;
    }

    let year = layout
        .year
        .and_then(|idx| values.get(idx))
        .and_then(|v| parse_year(v))
        .unwrap_or(DEFAULT_YEAR);

    let rating = layout
        .rating
        .and_then(|idx| values.get(idx))
        .and_then(|v| parse_rating(v))
        .unwrap_or(0.0);

    let genres = infer_or_fallback(title);
    Some(FilmRecord::new(title.clone(), year, rating, genres))
}

/// Parse a year, accepting trailing junk after the leading digits
///
/// Example: "1999" -> Some(1999), "2019 (re-release)" -> Some(2019)
fn parse_year(s: &str) -> Option<Year> {
    let s = s.trim();
    let end = s
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && (*c == '-' || *c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    s[..end].parse().ok()
}

/// Parse a star rating, ignoring anything after the number
///
/// Example: "4.5" -> Some(4.5), "3 stars" -> Some(3.0), "" -> None
fn parse_rating(s: &str) -> Option<f32> {
    let s = s.trim();
    let mut seen_dot = false;
    let end = s
        .char_indices()
        .find(|&(i, c)| {
            if c == '.' && !seen_dot {
                seen_dot = true;
                false
            } else {
                !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+')))
            }
        })
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    s[..end].parse().ok()
}

/// Split a CSV line on commas, honouring double quotes.
///
/// A `"` toggles quoting and is dropped; commas inside quotes are kept.
/// Cells are trimmed.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                cells.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    cells.push(current.trim().to_string());
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_csv_line_quotes() {
        assert_eq!(
            parse_csv_line(r#"2024-01-01,"Crouching Tiger, Hidden Dragon",2000, 4.5"#),
            strings(&["2024-01-01", "Crouching Tiger, Hidden Dragon", "2000", "4.5"])
        );
        assert_eq!(parse_csv_line(""), strings(&[""]));
    }

    #[test]
    fn test_detect_layout_from_headers() {
        let layout = ColumnLayout::detect(&strings(&["Date", "Name", "Year", "Letterboxd URI", "Rating"]));
        assert_eq!(layout, ColumnLayout { name: 1, year: Some(2), rating: Some(4) });

        let layout = ColumnLayout::detect(&strings(&["Title", "Year"]));
        assert_eq!(layout, ColumnLayout { name: 0, year: Some(1), rating: None });
    }

    #[test]
    fn test_detect_layout_fallback() {
        let layout = ColumnLayout::detect(&strings(&["a", "b", "c", "d"]));
        assert_eq!(layout, ColumnLayout { name: 0, year: Some(1), rating: Some(3) });

        let layout = ColumnLayout::detect(&strings(&["a", "b", "c"]));
        assert_eq!(layout.rating, Some(2));
    }

    #[test]
    fn test_parse_year_and_rating() {
        assert_eq!(parse_year("1999"), Some(1999));
        assert_eq!(parse_year("2019 (re-release)"), Some(2019));
        assert_eq!(parse_year("unknown"), None);
        assert_eq!(parse_rating("4.5"), Some(4.5));
        assert_eq!(parse_rating("3 stars"), Some(3.0));
        assert_eq!(parse_rating("4.5.1"), Some(4.5));
        assert_eq!(parse_rating(""), None);
    }

    #[test]
    fn test_parse_csv_export() {
        let csv = "\u{FEFF}Date,Name,Year,Letterboxd URI,Rating\r\n\
                   2024-01-02,The Matrix,1999,https://boxd.it/a,5\r\n\
                   2024-01-03,Paterson,2016,https://boxd.it/b,\r\n\
                   \r\n\
                   2024-01-04,,2001,https://boxd.it/c,3\r\n\
                   2024-01-05,Heat,abc,https://boxd.it/d,oops\r\n";

        let films = parse_csv(csv).unwrap();
        assert_eq!(films.len(), 3);

        assert_eq!(films[0].title, "The Matrix");
        assert_eq!(films[0].year, 1999);
        assert_eq!(films[0].rating, 5.0);
        assert_eq!(films[0].genres, vec!["Science Fiction"]);

        // Unrated, unknown title -> fallback genres
        assert_eq!(films[1].rating, 0.0);
        assert_eq!(films[1].genres, vec!["Drama", "Unknown"]);

        // Bad year and rating fall back to defaults
        assert_eq!(films[2].title, "Heat");
        assert_eq!(films[2].year, DEFAULT_YEAR);
        assert_eq!(films[2].rating, 0.0);
        assert_eq!(films[2].genres, vec!["Crime"]);
    }

    #[test]
    fn test_parse_csv_headerless_three_columns() {
        let csv = "Dune,2021,4.5\nArrival,2016,5\n";
        let films = parse_csv(csv).unwrap();

        // First line is taken as the header row
        assert_eq!(films.len(), 1);
        assert_eq!(films[0].title, "Arrival");
        assert_eq!(films[0].rating, 5.0);
    }

    #[test]
    fn test_parse_csv_errors() {
        assert!(matches!(parse_csv(""), Err(DataLoadError::EmptyFile)));
        assert!(matches!(parse_csv("Name,Year"), Err(DataLoadError::EmptyFile)));

        // Header plus newline has a (blank) row, so it is NoFilms, not EmptyFile
        match parse_csv("Name,Year\n") {
            Err(DataLoadError::NoFilms { headers }) => assert_eq!(headers, strings(&["Name", "Year"])),
            other => panic!("expected NoFilms, got {:?}", other),
        }

        match parse_csv("Name,Year\n,2001\n") {
            Err(DataLoadError::NoFilms { headers }) => assert_eq!(headers, strings(&["Name", "Year"])),
            other => panic!("expected NoFilms, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_csv_file_missing() {
        let result = parse_csv_file(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(DataLoadError::FileNotFound { .. })));
    }
}
