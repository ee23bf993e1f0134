//! # Data Loader Crate
//!
//! This crate turns heterogeneous film-history inputs into a normalized list
//! of [`FilmRecord`]s for the analysis pipeline.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (FilmRecord, FilmHistory) and their defaults
//! - **parser**: Letterboxd CSV exports with header sniffing
//! - **json**: Lenient JSON film lists
//! - **loader**: Whole export directories (watched + ratings, merged)
//! - **inference**: Title keyword genre inference
//! - **demo**: Built-in demo profiles
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{load_export_dir, parse_csv_file};
//! use std::path::Path;
//!
//! // A single export file
//! let films = parse_csv_file(Path::new("export/ratings.csv"))?;
//!
//! // Or the whole unpacked export
//! let films = load_export_dir(Path::new("export"))?;
//!
//! println!("Loaded {} films", films.len());
//! ```
//!
//! ## Record Contract
//!
//! Every loader honours the same defaults so downstream scoring never sees a
//! half-built record: year 2020 when unknown, rating 0 when unrated or
//! unparsable, and genres inferred from the title (falling back to
//! `["Drama", "Unknown"]`) when the source has none.

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod json;
pub mod loader;
pub mod inference;
pub mod demo;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{
    // Type aliases
    Year,
    // Core types
    FilmRecord,
    FilmHistory,
    // Defaults
    DEFAULT_YEAR,
    FALLBACK_GENRE,
    UNKNOWN_GENRE,
};
pub use parser::{parse_csv, parse_csv_file};
pub use json::{parse_films_json, parse_films_json_file};
pub use loader::load_export_dir;
pub use inference::{infer_genres, infer_or_fallback};
pub use demo::{demo_history, demo_usernames, DEMO_USERS};
