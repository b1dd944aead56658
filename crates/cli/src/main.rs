//! phonoscore CLI — score pronunciation attempts against target words.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use phonoscore_core::config::{ScoringConfig, ScoringMode};
use phonoscore_core::phoneme_sequence;
use phonoscore_core::score::batch::{load_batch, score_batch, write_reports};
use phonoscore_core::score::report::{ScoreReport, Scorer};
use phonoscore_core::types::{sequence_to_string, MatchType};

// ─── Top-level CLI ───────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "phonoscore",
    about = "Phoneme and viseme scoring for pronunciation practice",
    version,
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Show verbose output
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Score one transcription against a target
    Score(ScoreArgs),
    /// Print the phoneme sequence for a word or sentence
    Phonemes(PhonemesArgs),
    /// Score every attempt in a JSON file
    Batch(BatchArgs),
}

// ─── Shared arguments (embedded in scoring subcommands) ──────────

#[derive(Parser, Debug)]
struct SharedArgs {
    /// JSON scoring config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Similarity granularity (overrides config)
    #[arg(long, value_parser = ["phoneme", "sentence"])]
    mode: Option<String>,

    /// Compare plain text per character instead of converting it to phonemes
    #[arg(long, default_value_t = false)]
    no_g2p: bool,

    /// Score (percent) needed to pass (overrides config)
    #[arg(long)]
    pass_threshold: Option<u8>,
}

// ─── Subcommands ─────────────────────────────────────────────────

#[derive(Parser, Debug)]
struct ScoreArgs {
    #[command(flatten)]
    shared: SharedArgs,

    /// Target word, sentence, or phoneme string
    #[arg(long)]
    target: String,

    /// Recognized text or phoneme string
    #[arg(long)]
    transcription: String,

    /// Print the full report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct PhonemesArgs {
    /// Word or sentence
    #[arg(required = true)]
    text: Vec<String>,

    /// Print as a JSON array
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    #[command(flatten)]
    shared: SharedArgs,

    /// JSON array of {"target", "transcription"} objects
    input: PathBuf,

    /// Write reports here instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

// ─── Main ────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    // Init logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let result = match cli.command {
        Command::Score(args) => run_score(args),
        Command::Phonemes(args) => run_phonemes(args),
        Command::Batch(args) => run_batch(args),
    };

    if let Err(e) = result {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

// ─── Helpers ─────────────────────────────────────────────────────

/// Load the config file (if any) and apply flag overrides.
fn build_config(shared: &SharedArgs) -> Result<ScoringConfig> {
    let mut config = match &shared.config {
        Some(path) => ScoringConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ScoringConfig::default(),
    };

    if let Some(mode) = &shared.mode {
        config.mode = mode.parse::<ScoringMode>()?;
    }
    if shared.no_g2p {
        config.use_g2p = false;
    }
    if let Some(threshold) = shared.pass_threshold {
        config.pass_threshold = threshold;
    }
    Ok(config)
}

fn match_symbol(match_type: MatchType) -> &'static str {
    match match_type {
        MatchType::Exact => "ok",
        MatchType::StressMismatch => "stress",
        MatchType::Mismatch => "miss",
    }
}

fn print_report(report: &ScoreReport) {
    println!("Target:        {}", report.target_text);
    println!("Transcription: {}", report.transcription);
    println!("Target phonemes: {}", sequence_to_string(&report.target_phonemes));
    println!("Spoken phonemes: {}", sequence_to_string(&report.spoken_phonemes));

    let breakdown: Vec<String> = report
        .phoneme_matches
        .iter()
        .map(|m| format!("{}:{}", m.phoneme, match_symbol(m.match_type)))
        .collect();
    println!("Phonemes: {}", breakdown.join(" "));

    println!(
        "Similarity: {}% ({} mode)",
        report.overall_similarity, report.mode
    );
    println!("Viseme accuracy: {}%", report.viseme_accuracy);
    println!(
        "{} {}/5 stars, {}",
        report.feedback.message(),
        report.feedback.stars,
        if report.feedback.passed { "passed" } else { "not passed" }
    );
}

// ─── Runners ─────────────────────────────────────────────────────

fn run_score(args: ScoreArgs) -> Result<()> {
    let config = build_config(&args.shared)?;
    let scorer = Scorer::new(config)?;
    let report = scorer.score(&args.target, &args.transcription);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn run_phonemes(args: PhonemesArgs) -> Result<()> {
    let text = args.text.join(" ");
    let phonemes = phoneme_sequence(&text);
    log::debug!("{} phoneme(s) for '{}'", phonemes.len(), text);

    if args.json {
        println!("{}", serde_json::to_string(&phonemes)?);
    } else {
        println!("{}", sequence_to_string(&phonemes));
    }
    Ok(())
}

fn run_batch(args: BatchArgs) -> Result<()> {
    let config = build_config(&args.shared)?;
    let scorer = Scorer::new(config)?;

    let items = load_batch(&args.input)
        .with_context(|| format!("Failed to load batch {}", args.input.display()))?;
    let reports = score_batch(&scorer, &items);

    let passed = reports.iter().filter(|r| r.feedback.passed).count();
    log::info!("Scored {} attempt(s), {} passed", reports.len(), passed);

    match &args.output {
        Some(path) => {
            write_reports(path, &reports)?;
            println!("Output: {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&reports)?),
    }
    Ok(())
}
