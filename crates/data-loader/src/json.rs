//! Lenient JSON film lists.
//!
//! Accepts either a bare array of film objects or an object with a `films`
//! array (the shape scrapers and the demo fixtures use). Each element is
//! converted on its own so one corrupt entry cannot sink the whole list.

use crate::error::{DataLoadError, Result};
use crate::types::{DEFAULT_YEAR, FilmRecord, Year};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Parse a JSON film list held in memory.
pub fn parse_films_json(text: &str) -> Result<Vec<FilmRecord>> {
    let document: Value = serde_json::from_str(text)?;

    let items: &[Value] = match &document {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => match map.get("films") {
            Some(Value::Array(items)) => items.as_slice(),
            _ => &[],
        },
        _ => &[],
    };

    let films: Vec<FilmRecord> = items.iter().filter_map(film_from_value).collect();

    if films.len() < items.len() {
        warn!("Skipped {} non-object film entries", items.len() - films.len());
    }
    debug!("Parsed {} films from JSON", films.len());

    Ok(films)
}

/// Read and parse a JSON film list from disk
pub fn parse_films_json_file(path: &Path) -> Result<Vec<FilmRecord>> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let text = fs::read_to_string(path)?;
    parse_films_json(&text)
}

/// Convert one JSON element into a film.
///
/// Only non-objects are rejected. Missing or mistyped fields take their
/// defaults: title "", year 2020, rating 0, no genres. Numbers encoded as
/// strings are accepted for year and rating.
pub fn film_from_value(value: &Value) -> Option<FilmRecord> {
    let object = value.as_object()?;

    let title = object
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let year = object
        .get("year")
        .and_then(number_like)
        .filter(|y| y.fract() == 0.0 && *y >= Year::MIN as f64 && *y <= Year::MAX as f64)
        .map(|y| y as Year)
        .unwrap_or(DEFAULT_YEAR);

    let rating = object
        .get("rating")
        .and_then(number_like)
        .map(|r| r as f32)
        .unwrap_or(0.0);

    // A non-list genre field counts as "no genres"
    let genres = match object.get("genres") {
        Some(Value::Array(tags)) => tags
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };

    Some(FilmRecord::new(title, year, rating, genres))
}

fn number_like(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
