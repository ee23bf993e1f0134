use anyhow::{anyhow, Context, Result};
use archetypes::{Archetype, ARCHETYPES};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use colored::{ColoredString, Colorize};
use data_loader::{
    demo_history, demo_usernames, load_export_dir, parse_csv_file, parse_films_json_file,
    FilmHistory, FilmRecord, DEMO_USERS,
};
use engine::{
    AdvancedReport, CachedGenreSource, Comparison, PersonalityEngine, PersonalityReport,
    TitleInferenceSource,
};
use pipeline::{AggregatorConfig, ArchetypeScore};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Reel Persona - Film Personality Analysis
#[derive(Parser)]
#[command(name = "reel-persona")]
#[command(about = "Infer a film personality type from your watch history", long_about = None)]
struct Cli {
    /// Number of top genres used for classification (at least 1)
    #[arg(
        long,
        global = true,
        default_value = "3",
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    top_n: usize,

    /// Reference year for the recency bonus (defaults to the current year)
    #[arg(long, global = true)]
    year: Option<i32>,

    /// Print the report as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a Letterboxd CSV export file (watched.csv or ratings.csv)
    Csv {
        /// Path to the CSV file
        file: PathBuf,
    },

    /// Analyze a JSON film list
    Json {
        /// Path to the JSON file
        file: PathBuf,
    },

    /// Analyze an unpacked Letterboxd export directory
    Export {
        /// Directory containing watched.csv and/or ratings.csv
        dir: PathBuf,
    },

    /// Analyze a built-in demo profile
    Demo {
        /// Demo username (a random one when omitted)
        #[arg(long)]
        user: Option<String>,
    },

    /// Enrich genres and run the rating-driven analysis
    Advanced {
        /// CSV file, JSON file or export directory
        file: PathBuf,

        /// A favourite film title (repeat up to four times)
        #[arg(long = "top4")]
        top4: Vec<String>,

        /// Genre cache file, read before and written after the run
        #[arg(long)]
        cache: Option<PathBuf>,

        /// Your own four-letter type, to compare against the result
        #[arg(long)]
        mbti: Option<String>,
    },

    /// List all sixteen archetypes
    Archetypes,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AggregatorConfig::default().with_top_n(cli.top_n);
    if let Some(year) = cli.year {
        config = config.with_reference_year(year);
    }

    match cli.command {
        Commands::Csv { file } => {
            let history = load_history(&file)?;
            handle_quick(config, &history, cli.json)?
        }
        Commands::Json { file } => {
            let history = load_history(&file)?;
            handle_quick(config, &history, cli.json)?
        }
        Commands::Export { dir } => {
            let history = load_history(&dir)?;
            handle_quick(config, &history, cli.json)?
        }
        Commands::Demo { user } => handle_demo(config, user, cli.json)?,
        Commands::Advanced {
            file,
            top4,
            cache,
            mbti,
        } => handle_advanced(config, &file, &top4, cache, mbti.as_deref(), cli.json).await?,
        Commands::Archetypes => handle_archetypes(cli.json)?,
    }

    Ok(())
}

/// Load a film history from a CSV file, a JSON file or an export directory
fn load_history(path: &Path) -> Result<FilmHistory> {
    let start = Instant::now();

    let films = if path.is_dir() {
        load_export_dir(path)
    } else if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
        parse_films_json_file(path)
    } else {
        parse_csv_file(path)
    }
    .with_context(|| format!("Failed to load films from {}", path.display()))?;

    eprintln!(
        "{} Loaded {} films from {} in {:?}",
        "✓".green(),
        films.len(),
        path.display(),
        start.elapsed()
    );

    let username = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "you".to_string());
    Ok(FilmHistory::new(username, films))
}

/// Handle the 'csv', 'json' and 'export' commands
fn handle_quick(config: AggregatorConfig, history: &FilmHistory, json: bool) -> Result<()> {
    let engine = PersonalityEngine::new(config);
    let report = engine
        .analyze(&history.films)
        .with_context(|| format!("Failed to analyze {}", history.label()))?;

    if json {
        write_json(&mut std::io::stdout().lock(), &report)?;
    } else {
        print_report(history.label(), &report);
    }
    Ok(())
}

/// Handle the 'demo' command
fn handle_demo(config: AggregatorConfig, user: Option<String>, json: bool) -> Result<()> {
    let username = match user {
        Some(name) => name,
        None => {
            let pick = rand::random::<u32>() as usize % DEMO_USERS.len();
            DEMO_USERS[pick].username.to_string()
        }
    };

    let history = demo_history(&username).ok_or_else(|| {
        anyhow!(
            "Unknown demo user '{}' (available: {})",
            username,
            demo_usernames().join(", ")
        )
    })?;
    info!("Using demo profile {}", history.username);

    handle_quick(config, &history, json)
}

/// Handle the 'advanced' command
async fn handle_advanced(
    config: AggregatorConfig,
    path: &Path,
    favourites: &[String],
    cache: Option<PathBuf>,
    mbti: Option<&str>,
    json: bool,
) -> Result<()> {
    let history = load_history(path)?;

    let source = match cache {
        Some(cache_path) => CachedGenreSource::open(cache_path, TitleInferenceSource).await,
        None => CachedGenreSource::in_memory(TitleInferenceSource),
    };
    let engine = PersonalityEngine::with_source(config, source);

    let report = engine
        .analyze_advanced(&history.films, favourites, mbti)
        .await
        .with_context(|| format!("Failed to analyze {}", history.label()))?;

    engine
        .source()
        .save()
        .await
        .context("Failed to save genre cache")?;

    if json {
        write_json(&mut std::io::stdout().lock(), &report)?;
    } else {
        print_advanced_report(history.label(), &history.films, &report);
    }
    Ok(())
}

/// Handle the 'archetypes' command
fn handle_archetypes(json: bool) -> Result<()> {
    if json {
        write_json(&mut std::io::stdout().lock(), &ARCHETYPES)?;
        return Ok(());
    }

    println!("{}", "Film Personality Archetypes:".bold().blue());
    for archetype in ARCHETYPES.iter() {
        println!(
            "{} {} {} [{}]",
            archetype.icon,
            tinted(archetype.code.as_str(), archetype).bold(),
            archetype.name,
            archetype.code.temperament()
        );
        println!("   {}", archetype.tagline.italic());
        println!("   Primary: {}", archetype.primary_genres.join(", "));
    }
    Ok(())
}

/// Write `value` as pretty JSON plus a trailing newline
fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Helper function to print the archetype header
fn print_archetype(label: &str, archetype: &Archetype) {
    println!();
    println!("{}", format!("Film personality of {}:", label).bold().blue());
    println!(
        "{} {} ({})",
        archetype.icon,
        tinted(archetype.name, archetype).bold(),
        archetype.code
    );
    println!("   {}", archetype.tagline.italic());
    println!("   {}", archetype.description);
    println!("{}Traits: {}", "• ".green(), archetype.traits.join(", "));
    println!("{}Kindred critic: {}", "• ".green(), archetype.quote);
}

fn print_matches(matches: &[ArchetypeScore]) {
    println!("{}", "Closest archetypes:".bold().blue());
    for (rank, entry) in matches.iter().take(5).enumerate() {
        let archetype = entry.archetype();
        println!(
            "{}. {} {} ({}) - Score: {:.2}",
            (rank + 1).to_string().green(),
            archetype.icon,
            archetype.name,
            archetype.code,
            entry.score
        );
    }
}

/// Helper function to format and print a quick-flow report
fn print_report(label: &str, report: &PersonalityReport) {
    print_archetype(label, report.archetype);

    println!("{}", "Top genres:".bold().blue());
    for genre in &report.top_genres {
        println!(
            "  {:<16} {:>5.1} {} {}%",
            genre.genre,
            genre.weight,
            bar(genre.percentage as f32),
            genre.percentage
        );
    }

    println!("{}", "Stats:".bold().blue());
    println!("{}Films: {}", "• ".cyan(), report.stats.total_films);
    println!("{}Ratings: {}", "• ".cyan(), report.stats.total_ratings);
    println!("{}Average rating: {:.1}", "• ".cyan(), report.stats.avg_rating);
    println!("{}Genres: {}", "• ".cyan(), report.stats.unique_genres);

    print_matches(&report.matches);
}

/// Helper function to format and print an advanced-flow report
fn print_advanced_report(label: &str, films: &[FilmRecord], report: &AdvancedReport) {
    print_archetype(label, report.archetype);

    if let Some(comparison) = &report.comparison {
        match comparison {
            Comparison::Aligned { code } => {
                println!("{} Your taste matches your type ({})", "✓".green(), code)
            }
            Comparison::Contrast { actual, inferred } => println!(
                "{} You are {}, but you watch like {}",
                "↔".yellow(),
                actual,
                inferred
            ),
        }
    }

    println!("{}", "Genres by score:".bold().blue());
    for genre in report.top_genres.iter().take(8) {
        let bonus = if genre.multipliers.top4 > 0.0 { " ★" } else { "" };
        println!(
            "  {:<16} {:>5.2} avg {:.1} x{:.3} ({} films) {} {:.1}%{}",
            genre.genre,
            genre.score,
            genre.avg_rating,
            genre.multipliers.total,
            genre.count,
            bar(genre.percentage),
            genre.percentage,
            bonus
        );
    }

    println!("{}", "Stats:".bold().blue());
    println!(
        "{}Films with genres: {} of {}",
        "• ".cyan(),
        report.stats.total_films,
        films.len()
    );
    println!("{}Ratings: {}", "• ".cyan(), report.stats.total_ratings);
    println!("{}Average rating: {:.1}", "• ".cyan(), report.stats.avg_rating);
    println!("{}Genres: {}", "• ".cyan(), report.stats.unique_genres);

    print_matches(&report.matches);
}

/// Twenty-cell bar for a 0-100 percentage
fn bar(percentage: f32) -> String {
    let filled = (percentage.clamp(0.0, 100.0) / 5.0).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(20 - filled))
}

/// Color text with an archetype's theme colour
fn tinted(text: &str, archetype: &Archetype) -> ColoredString {
    match hex_rgb(archetype.color) {
        Some((r, g, b)) => text.truecolor(r, g, b),
        None => text.normal(),
    }
}

fn hex_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_rgb() {
        assert_eq!(hex_rgb("#6A5ACD"), Some((0x6A, 0x5A, 0xCD)));
        assert_eq!(hex_rgb("6A5ACD"), None);
        assert_eq!(hex_rgb("#FFF"), None);
    }

    #[test]
    fn test_bar() {
        assert_eq!(bar(0.0).chars().filter(|c| *c == '█').count(), 0);
        assert_eq!(bar(50.0).chars().filter(|c| *c == '█').count(), 10);
        assert_eq!(bar(140.0).chars().count(), 20);
    }

    #[test]
    fn test_json_output_is_one_document() {
        let history = demo_history("dreamweaver").unwrap();
        let report = PersonalityEngine::new(AggregatorConfig::default().with_reference_year(2025))
            .analyze(&history.films)
            .unwrap();

        let mut out = Vec::new();
        write_json(&mut out, &report).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert!(value.get("top_genres").is_some());
        assert!(out.ends_with(b"}\n"));

        let mut out = Vec::new();
        write_json(&mut out, &ARCHETYPES).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(16));
    }

    #[test]
    fn test_top_n_must_be_positive() {
        assert!(Cli::try_parse_from(["reel-persona", "--top-n", "0", "archetypes"]).is_err());
        assert!(Cli::try_parse_from(["reel-persona", "--top-n", "-2", "archetypes"]).is_err());

        let cli = Cli::try_parse_from(["reel-persona", "archetypes", "--top-n", "1"]).unwrap();
        assert_eq!(cli.top_n, 1);
        assert_eq!(Cli::parse_from(["reel-persona", "archetypes"]).top_n, 3);
    }

    #[test]
    fn test_cli_parses_advanced() {
        let cli = Cli::parse_from([
            "reel-persona",
            "--json",
            "advanced",
            "ratings.csv",
            "--top4",
            "Arrival",
            "--top4",
            "Heat",
            "--mbti",
            "intj",
        ]);
        assert!(cli.json);
        match cli.command {
            Commands::Advanced { top4, mbti, cache, .. } => {
                assert_eq!(top4, vec!["Arrival", "Heat"]);
                assert_eq!(mbti.as_deref(), Some("intj"));
                assert!(cache.is_none());
            }
            _ => panic!("expected advanced"),
        }
    }
}
