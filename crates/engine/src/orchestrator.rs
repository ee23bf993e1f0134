//! # Personality Engine
//!
//! This module coordinates the two analysis flows.
//!
//! Quick flow (synchronous):
//! 1. Aggregate weighted genres
//! 2. Classify with the affinity scorer
//! 3. Rank all archetypes with the membership matcher
//!
//! Advanced flow (async):
//! 1. Parse the self-reported code, if any
//! 2. Enrich films with genres in batches
//! 3. Resolve the favourite films' genres through the same source
//! 4. Score genres by average rating with volume and favourite bonuses
//! 5. Rank all archetypes; the first one wins
//! 6. Compare with the self-reported code

use std::time::Instant;

use archetypes::{archetype, ArchetypeCode};
use data_loader::{FilmRecord, DEFAULT_YEAR};
use pipeline::{
    classify, rank_all, signals, AdvancedAnalyzer, AggregatorConfig, AnalysisError,
    GenreAggregator,
};
use tracing::{debug, info, warn};

use crate::enrichment::{BatchEnricher, EnricherConfig, GenreSource, TitleInferenceSource};
use crate::report::{AdvancedReport, Comparison, PersonalityReport};

/// Favourite films considered for the genre bonus
pub const MAX_FAVOURITES: usize = 4;

/// Coordinates aggregation, scoring and enrichment
#[derive(Debug, Clone)]
pub struct PersonalityEngine<S = TitleInferenceSource> {
    aggregator: GenreAggregator,
    analyzer: AdvancedAnalyzer,
    enricher: BatchEnricher<S>,
}

impl PersonalityEngine<TitleInferenceSource> {
    /// Engine that enriches from title keywords only
    pub fn new(config: AggregatorConfig) -> Self {
        Self::with_source(config, TitleInferenceSource)
    }
}

impl Default for PersonalityEngine<TitleInferenceSource> {
    fn default() -> Self {
        Self::new(AggregatorConfig::default())
    }
}

impl<S: GenreSource> PersonalityEngine<S> {
    pub fn with_source(config: AggregatorConfig, source: S) -> Self {
        Self {
            aggregator: GenreAggregator::new(config),
            analyzer: AdvancedAnalyzer::new(),
            enricher: BatchEnricher::new(source),
        }
    }

    pub fn with_enricher_config(self, config: EnricherConfig) -> Self {
        let Self {
            aggregator,
            analyzer,
            enricher,
        } = self;
        let source = enricher.into_source();
        Self {
            aggregator,
            analyzer,
            enricher: BatchEnricher::with_config(source, config),
        }
    }

    pub fn source(&self) -> &S {
        self.enricher.source()
    }

    /// Quick analysis of films that already carry genres.
    ///
    /// # Returns
    /// * `Ok(PersonalityReport)` - winner, genre ranking, stats and all matches
    /// * `Err(InsufficientData)` - no film had any genre
    pub fn analyze(&self, films: &[FilmRecord]) -> Result<PersonalityReport, AnalysisError> {
        let start = Instant::now();

        let analysis = self.aggregator.analyze(films);
        if analysis.is_empty() {
            warn!("No genres found in {} films", films.len());
            return Err(AnalysisError::InsufficientData);
        }

        let archetype = classify(&analysis.top_genres)?;
        let matches = rank_all(&signals(&analysis.top_genres));

        info!(
            "Analyzed {} films in {:.2?}: {} {}",
            films.len(),
            start.elapsed(),
            archetype.code,
            archetype.name
        );

        Ok(PersonalityReport {
            archetype,
            top_genres: analysis.top_genres,
            all_genres: analysis.all_genres,
            stats: analysis.stats,
            matches,
        })
    }

    /// Advanced analysis: enrich, score by rating, match.
    ///
    /// # Arguments
    /// * `films` - The user's films, genres optional
    /// * `favourite_titles` - Up to four pinned titles; blanks are ignored
    /// * `actual_code` - Self-reported code to compare against, if any
    ///
    /// # Returns
    /// * `Err(UnknownArchetype)` - `actual_code` did not parse
    /// * `Err(InsufficientData)` - no genre survived enrichment
    pub async fn analyze_advanced<T: AsRef<str>>(
        &self,
        films: &[FilmRecord],
        favourite_titles: &[T],
        actual_code: Option<&str>,
    ) -> Result<AdvancedReport, AnalysisError> {
        let start = Instant::now();

        let actual = actual_code
            .map(str::parse::<ArchetypeCode>)
            .transpose()?;

        let enriched = self.enricher.enrich(films).await;
        let favourite_genres = self.favourite_genres(favourite_titles).await;

        let analysis = self.analyzer.analyze(&enriched, &favourite_genres);
        if analysis.is_empty() {
            warn!("No genres survived enrichment of {} films", films.len());
            return Err(AnalysisError::InsufficientData);
        }

        let matches = rank_all(&signals(&analysis.genres));
        let winner = matches
            .first()
            .map(|m| m.code)
            .ok_or(AnalysisError::InsufficientData)?;
        let comparison = actual.map(|actual| Comparison::new(actual, winner));

        info!(
            "Advanced analysis of {} films in {:.2?}: {}",
            films.len(),
            start.elapsed(),
            winner
        );

        Ok(AdvancedReport {
            archetype: archetype(winner),
            top_genres: analysis.genres,
            stats: analysis.stats,
            matches,
            comparison,
        })
    }

    /// Genres of the favourite films, looked up as if released in the
    /// default year. Failed lookups are skipped.
    async fn favourite_genres<T: AsRef<str>>(&self, titles: &[T]) -> Vec<String> {
        let mut genres = Vec::new();

        for title in titles
            .iter()
            .map(|t| t.as_ref().trim())
            .filter(|t| !t.is_empty())
            .take(MAX_FAVOURITES)
        {
            let lookup = FilmRecord::new(title, DEFAULT_YEAR, 0.0, Vec::new());
            match self.enricher.source().genres_for(&lookup).await {
                Ok(found) => genres.extend(found),
                Err(e) => warn!("Skipping favourite {}: {}", title, e),
            }
        }

        debug!("Favourite genres: {:?}", genres);
        genres
    }
}
