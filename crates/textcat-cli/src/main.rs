//! textcat — train a Naive Bayes categorizer and label documents, or score a
//! labelled run against documents sorted by category.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use textcat_core::ClassifierConfig;
use textcat_runtime::{read_results, tally, DocumentClassifier, ExpectedResults};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod report;

#[derive(Parser)]
#[command(name = "textcat")]
#[command(about = "Naive Bayes document categorizer")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train on category directories and label documents
    Classify {
        /// Training roots, each holding one subdirectory per category
        #[arg(long = "training-dirs", required = true, num_args = 1..)]
        training_dirs: Vec<PathBuf>,

        /// Files or directories of documents to label
        #[arg(long = "classify-docs", required = true, num_args = 1..)]
        classify_docs: Vec<PathBuf>,

        /// Stopword list (comma or whitespace separated)
        #[arg(long = "stopwords-file")]
        stopwords_file: Option<PathBuf>,

        /// Additive smoothing constant
        #[arg(long)]
        smoothing: Option<f64>,

        /// JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Log per-category statistics and scores
        #[arg(long = "trace-info")]
        trace_info: bool,
    },

    /// Compare a results listing against expected category directories
    Validate {
        /// Output of `textcat classify`
        results_file: PathBuf,

        /// Roots holding the documents sorted into category subdirectories
        #[arg(required = true)]
        expected_dirs: Vec<PathBuf>,
    },
}

fn init_tracing(trace_info: bool) {
    let default = if trace_info { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .init();
}

/// Defaults, then the config file, then `TEXTCAT_*` variables, then flags.
fn resolve_config(
    config_file: Option<&Path>,
    stopwords_file: Option<PathBuf>,
    smoothing: Option<f64>,
    trace_info: bool,
) -> anyhow::Result<ClassifierConfig> {
    let mut config = match config_file {
        Some(path) => ClassifierConfig::load(path)?,
        None => ClassifierConfig::default(),
    }
    .with_env_overrides();

    if let Some(path) = stopwords_file {
        config.stopwords_file = path;
    }
    if let Some(k) = smoothing {
        config.smoothing = k;
    }
    config.trace_info |= trace_info;
    config.validate()?;
    Ok(config)
}

fn cmd_classify(
    config: &ClassifierConfig,
    training_dirs: &[PathBuf],
    classify_docs: &[PathBuf],
) -> anyhow::Result<()> {
    let classifier = DocumentClassifier::train(config, training_dirs)?;
    let results = classifier.classify(classify_docs)?;
    info!("Classified {} documents", results.len());

    let mut out = std::io::stdout().lock();
    report::write_results(&mut out, &results)?;
    out.flush()?;
    Ok(())
}

fn cmd_validate(results_file: &Path, expected_dirs: &[PathBuf]) -> anyhow::Result<()> {
    let expected = ExpectedResults::from_dirs(expected_dirs)?;
    let results = read_results(results_file)?;
    let tallies = tally(&results, &expected)
        .with_context(|| format!("validating {}", results_file.display()))?;

    let mut out = std::io::stdout().lock();
    report::write_tallies(&mut out, &tallies)?;
    out.flush()?;
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Classify {
            training_dirs,
            classify_docs,
            stopwords_file,
            smoothing,
            config,
            trace_info,
        } => {
            let config = resolve_config(config.as_deref(), stopwords_file, smoothing, trace_info)?;
            init_tracing(config.trace_info);
            cmd_classify(&config, &training_dirs, &classify_docs)
        }
        Commands::Validate {
            results_file,
            expected_dirs,
        } => {
            init_tracing(false);
            cmd_validate(&results_file, &expected_dirs)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
