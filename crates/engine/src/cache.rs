//! JSON-backed genre cache.
//!
//! The cache file is a flat JSON object keyed by `"{title}_{year}"`:
//!
//! ```json
//! {
//!   "Arrival_2016": ["Science Fiction", "Drama"],
//!   "Heat_1995": ["Crime", "Action", "Thriller"]
//! }
//! ```
//!
//! Misses go to a fallback source; non-empty answers are remembered and
//! written back by [`CachedGenreSource::save`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use data_loader::{FilmRecord, Year};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::enrichment::GenreSource;
use crate::error::EnrichmentError;

type CacheMap = BTreeMap<String, Vec<String>>;

/// Cache key of a film
pub fn cache_key(title: &str, year: Year) -> String {
    format!("{}_{}", title, year)
}

/// A [`GenreSource`] answering from a JSON cache before asking `fallback`
#[derive(Debug)]
pub struct CachedGenreSource<F> {
    path: Option<PathBuf>,
    entries: Mutex<CacheMap>,
    fallback: F,
}

impl<F: GenreSource> CachedGenreSource<F> {
    /// A cache that lives only in memory
    pub fn in_memory(fallback: F) -> Self {
        Self {
            path: None,
            entries: Mutex::new(CacheMap::new()),
            fallback,
        }
    }

    /// Open the cache file at `path`.
    ///
    /// A missing file starts an empty cache at that path. An unreadable or
    /// corrupt file is logged and also starts empty, so a bad cache never
    /// blocks an analysis.
    pub async fn open(path: impl Into<PathBuf>, fallback: F) -> Self {
        let path = path.into();
        let entries = match load_entries(&path).await {
            Ok(entries) => {
                info!("Loaded {} cached genre entries from {}", entries.len(), path.display());
                entries
            }
            Err(EnrichmentError::CacheIo { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                debug!("No genre cache at {}, starting empty", path.display());
                CacheMap::new()
            }
            Err(e) => {
                warn!("Ignoring unusable genre cache: {}", e);
                CacheMap::new()
            }
        };

        Self {
            path: Some(path),
            entries: Mutex::new(entries),
            fallback,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    /// Pre-seed an entry
    pub async fn insert(&self, title: &str, year: Year, genres: Vec<String>) {
        self.entries.lock().await.insert(cache_key(title, year), genres);
    }

    /// Write the cache back to its file. No-op for in-memory caches.
    pub async fn save(&self) -> Result<(), EnrichmentError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let json = {
            let entries = self.entries.lock().await;
            serde_json::to_string_pretty(&*entries)?
        };

        tokio::fs::write(path, json)
            .await
            .map_err(|source| EnrichmentError::CacheIo {
                path: path.clone(),
                source,
            })?;
        debug!("Saved genre cache to {}", path.display());
        Ok(())
    }
}

impl<F: GenreSource> GenreSource for CachedGenreSource<F> {
    fn name(&self) -> &str {
        "Cache"
    }

    async fn genres_for(&self, film: &FilmRecord) -> Result<Vec<String>, EnrichmentError> {
        let key = cache_key(&film.title, film.year);

        if let Some(genres) = self.entries.lock().await.get(&key) {
            return Ok(genres.clone());
        }

        let genres = self.fallback.genres_for(film).await?;
        if !genres.is_empty() {
            self.entries.lock().await.insert(key, genres.clone());
        }
        Ok(genres)
    }
}

async fn load_entries(path: &Path) -> Result<CacheMap, EnrichmentError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| EnrichmentError::CacheIo {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrichment::TitleInferenceSource;
    use tempfile::tempdir;

    fn film(title: &str, year: Year) -> FilmRecord {
        FilmRecord::with_genres(title, year, 0.0, &[])
    }

    #[test]
    fn test_cache_key() {
        assert_eq!(cache_key("Heat", 1995), "Heat_1995");
    }

    #[tokio::test]
    async fn test_hit_and_miss() {
        let source = CachedGenreSource::in_memory(TitleInferenceSource);
        source
            .insert("Paterson", 2016, vec!["Drama".to_string(), "Comedy".to_string()])
            .await;

        let hit = source.genres_for(&film("Paterson", 2016)).await.unwrap();
        assert_eq!(hit, vec!["Drama", "Comedy"]);

        // Same title, other year: a miss that inference cannot answer
        let miss = source.genres_for(&film("Paterson", 2017)).await.unwrap();
        assert!(miss.is_empty());
        assert_eq!(source.len().await, 1);

        // Fallback answers are remembered
        let inferred = source.genres_for(&film("Alien", 1979)).await.unwrap();
        assert_eq!(inferred, vec!["Science Fiction"]);
        assert_eq!(source.len().await, 2);
    }

    #[tokio::test]
    async fn test_open_and_save_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("genre_cache.json");
        std::fs::write(&path, r#"{"Heat_1995": ["Crime", "Action"]}"#).unwrap();

        let source = CachedGenreSource::open(&path, TitleInferenceSource).await;
        assert_eq!(source.len().await, 1);
        assert_eq!(
            source.genres_for(&film("Heat", 1995)).await.unwrap(),
            vec!["Crime", "Action"]
        );

        source.genres_for(&film("Dune", 2021)).await.unwrap();
        source.save().await.unwrap();

        let reopened = CachedGenreSource::open(&path, TitleInferenceSource).await;
        assert_eq!(reopened.len().await, 2);
    }

    #[tokio::test]
    async fn test_missing_or_corrupt_file_starts_empty() {
        let dir = tempdir().unwrap();

        let missing = CachedGenreSource::open(dir.path().join("nope.json"), TitleInferenceSource).await;
        assert!(missing.is_empty().await);

        let corrupt_path = dir.path().join("corrupt.json");
        std::fs::write(&corrupt_path, "{not json").unwrap();
        let corrupt = CachedGenreSource::open(&corrupt_path, TitleInferenceSource).await;
        assert!(corrupt.is_empty().await);
    }
}
