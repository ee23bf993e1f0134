//! # Batched Genre Enrichment
//!
//! Film lists from exports usually carry no real genre data. Before the
//! advanced analysis runs, every film is looked up in a [`GenreSource`]:
//!
//! 1. Split the films into fixed-size batches
//! 2. Look up each film of a batch, bounded by a per-batch timeout
//! 3. A batch that fails or times out is kept as it was, with a warning
//!
//! Batches run one after another so a slow source is never flooded.
//! Output order always equals input order.

use std::future::Future;
use std::time::{Duration, Instant};

use data_loader::{infer_genres, FilmRecord};
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::error::EnrichmentError;

pub const DEFAULT_BATCH_SIZE: usize = 5;
pub const DEFAULT_BATCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Something that knows the genres of a film.
///
/// An empty list means "unknown", not "no genres".
pub trait GenreSource: Send + Sync {
    /// Returns the name of this source (for logging/debugging)
    fn name(&self) -> &str;

    fn genres_for(
        &self,
        film: &FilmRecord,
    ) -> impl Future<Output = Result<Vec<String>, EnrichmentError>> + Send;
}

/// Infers genres from title keywords.
///
/// Only films still carrying placeholder genres are answered; real tags
/// are never replaced by a keyword guess.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleInferenceSource;

impl GenreSource for TitleInferenceSource {
    fn name(&self) -> &str {
        "TitleInference"
    }

    async fn genres_for(&self, film: &FilmRecord) -> Result<Vec<String>, EnrichmentError> {
        if !film.has_placeholder_genres() {
            return Ok(Vec::new());
        }
        Ok(infer_genres(&film.title))
    }
}

/// Batching behaviour of a [`BatchEnricher`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnricherConfig {
    /// Films per batch (values below 1 are treated as 1)
    pub batch_size: usize,
    /// Upper bound for one whole batch
    pub batch_timeout: Duration,
}

impl EnricherConfig {
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_batch_timeout(mut self, batch_timeout: Duration) -> Self {
        self.batch_timeout = batch_timeout;
        self
    }
}

impl Default for EnricherConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            batch_timeout: DEFAULT_BATCH_TIMEOUT,
        }
    }
}

/// Runs a [`GenreSource`] over a film list in batches
#[derive(Debug, Clone)]
pub struct BatchEnricher<S> {
    source: S,
    config: EnricherConfig,
}

impl<S: GenreSource> BatchEnricher<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, EnricherConfig::default())
    }

    pub fn with_config(source: S, config: EnricherConfig) -> Self {
        Self { source, config }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config(&self) -> &EnricherConfig {
        &self.config
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Enrich every film. Never fails; degraded batches keep their input.
    pub async fn enrich(&self, films: &[FilmRecord]) -> Vec<FilmRecord> {
        let start = Instant::now();
        let batch_size = self.config.batch_size.max(1);
        let mut enriched = Vec::with_capacity(films.len());
        let mut degraded = 0;

        for (batch, chunk) in films.chunks(batch_size).enumerate() {
            debug!(
                "Enriching batch {} ({} films) via {}",
                batch,
                chunk.len(),
                self.source.name()
            );

            match timeout(self.config.batch_timeout, self.enrich_chunk(chunk)).await {
                Ok(Ok(films)) => enriched.extend(films),
                Ok(Err(e)) => {
                    warn!("Batch {} failed, keeping original films: {}", batch, e);
                    degraded += 1;
                    enriched.extend_from_slice(chunk);
                }
                Err(_) => {
                    let e = EnrichmentError::Timeout(self.config.batch_timeout);
                    warn!("Batch {} failed, keeping original films: {}", batch, e);
                    degraded += 1;
                    enriched.extend_from_slice(chunk);
                }
            }
        }

        info!(
            "Enriched {} films in {:.2?} ({} degraded batches)",
            enriched.len(),
            start.elapsed(),
            degraded
        );
        enriched
    }

    /// Look up one batch; the first failure fails the whole batch
    async fn enrich_chunk(&self, chunk: &[FilmRecord]) -> Result<Vec<FilmRecord>, EnrichmentError> {
        let mut out = Vec::with_capacity(chunk.len());
        for film in chunk {
            let genres = self.source.genres_for(film).await?;
            let mut film = film.clone();
            if !genres.is_empty() {
                film.genres = genres;
            }
            out.push(film);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Returns the title as its only genre, fails on titles starting with "!"
    struct EchoSource;

    impl GenreSource for EchoSource {
        fn name(&self) -> &str {
            "Echo"
        }

        async fn genres_for(&self, film: &FilmRecord) -> Result<Vec<String>, EnrichmentError> {
            if film.title.starts_with('!') {
                return Err(EnrichmentError::Lookup {
                    title: film.title.clone(),
                    reason: "boom".to_string(),
                });
            }
            Ok(vec![film.title.to_uppercase()])
        }
    }

    /// Never answers in time
    struct StalledSource;

    impl GenreSource for StalledSource {
        fn name(&self) -> &str {
            "Stalled"
        }

        async fn genres_for(&self, _film: &FilmRecord) -> Result<Vec<String>, EnrichmentError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(vec!["Never".to_string()])
        }
    }

    fn films(titles: &[&str]) -> Vec<FilmRecord> {
        titles
            .iter()
            .map(|t| FilmRecord::with_genres(*t, 2020, 0.0, &["Drama"]))
            .collect()
    }

    #[tokio::test]
    async fn test_enriches_in_order() {
        let enricher = BatchEnricher::new(EchoSource);
        let input = films(&["a", "b", "c", "d", "e", "f", "g"]);

        let output = enricher.enrich(&input).await;
        let genres: Vec<&str> = output.iter().map(|f| f.genres[0].as_str()).collect();
        assert_eq!(genres, vec!["A", "B", "C", "D", "E", "F", "G"]);
    }

    #[tokio::test]
    async fn test_failed_batch_keeps_original_chunk() {
        let enricher =
            BatchEnricher::with_config(EchoSource, EnricherConfig::default().with_batch_size(2));
        let input = films(&["a", "b", "!c", "d", "e"]);

        let output = enricher.enrich(&input).await;
        let genres: Vec<&str> = output.iter().map(|f| f.genres[0].as_str()).collect();
        // Batch [!c, d] is kept unenriched
        assert_eq!(genres, vec!["A", "B", "Drama", "Drama", "E"]);
        assert_eq!(output[2].title, "!c");
    }

    #[tokio::test]
    async fn test_timed_out_batch_keeps_original_chunk() {
        let config = EnricherConfig::default()
            .with_batch_size(1)
            .with_batch_timeout(Duration::from_millis(20));
        let enricher = BatchEnricher::with_config(StalledSource, config);
        let input = films(&["a", "b"]);

        let output = enricher.enrich(&input).await;
        assert_eq!(output, input);
    }

    #[tokio::test]
    async fn test_empty_lookup_keeps_existing_genres() {
        let enricher = BatchEnricher::new(TitleInferenceSource);
        let input = vec![
            FilmRecord::with_genres("Paterson", 2016, 4.0, &["Drama"]),
            FilmRecord::with_genres("Alien", 1979, 5.0, &["Drama", "Unknown"]),
        ];

        let output = enricher.enrich(&input).await;
        assert_eq!(output[0].genres, vec!["Drama"]);
        assert!(output[1].genres.contains(&"Science Fiction".to_string()));
    }

    #[tokio::test]
    async fn test_inference_keeps_real_genres() {
        let enricher = BatchEnricher::new(TitleInferenceSource);
        let input = vec![
            FilmRecord::with_genres("There's Something About Mary", 1998, 5.0, &["Comedy", "Romance"]),
            FilmRecord::with_genres("Alien", 1979, 4.0, &["Horror"]),
            FilmRecord::with_genres("Alien", 1979, 4.0, &["Drama"]),
        ];

        let output = enricher.enrich(&input).await;
        assert_eq!(output[0].genres, vec!["Comedy", "Romance"]);
        assert_eq!(output[1].genres, vec!["Horror"]);
        // A lone fallback tag is still a placeholder
        assert_eq!(output[2].genres, vec!["Science Fiction"]);
    }

    #[tokio::test]
    async fn test_zero_batch_size_is_clamped() {
        let enricher =
            BatchEnricher::with_config(EchoSource, EnricherConfig::default().with_batch_size(0));
        let output = enricher.enrich(&films(&["a", "b"])).await;
        assert_eq!(output.len(), 2);
    }
}
