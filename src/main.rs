//! SpeakText - Text Normalization for Speech Synthesis
//!
//! Reads text from the command line or stdin and prints its spoken form.

use anyhow::{Context, Result};
use clap::Parser;
use speaktext::{PipelineConfig, TextNormalizer};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Sentences exercising each expander, shown by `--demo`
const DEMO_SENTENCES: &[&str] = &[
    "The meeting is at 3:30pm on the 21st.",
    "It costs $85K, about 15% of the budget.",
    "The model has 7B parameters and needs 16GB of RAM.",
    "Add 1/2 cup of sugar and .5 teaspoons of salt.",
    "The 80s had great music.",
    "Call 555-1234 or visit https://example.com today.",
    "Read pages 10-20 before Chapter IV.",
    "gpt-3 was trained on 1.5e12 tokens.",
    "The server runs at 192.168.1.1 and it's 25°C inside.",
    "Departure at 14:00, arrival around 9:05 AM.",
];

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to normalize (reads stdin line by line when omitted)
    text: Vec<String>,

    /// Path to a JSON pipeline config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Expand roman numerals
    #[arg(long)]
    roman: bool,

    /// Keep the original letter case
    #[arg(long)]
    keep_case: bool,

    /// Print the text after every pass
    #[arg(long)]
    trace: bool,

    /// Normalize a built-in set of sample sentences
    #[arg(long)]
    demo: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging (stderr, stdout carries the output)
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = match &args.config {
        Some(path) => PipelineConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => PipelineConfig::load()?,
    };
    if args.roman {
        config.expand_roman_numerals = true;
    }
    if args.keep_case {
        config.lowercase = false;
    }
    config.validate()?;
    debug!("Pipeline config: {:?}", config);

    let normalizer = TextNormalizer::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.demo {
        info!("Running {} demo sentences", DEMO_SENTENCES.len());
        for sentence in DEMO_SENTENCES {
            writeln!(out, "{}\n  -> {}", sentence, normalizer.normalize(sentence))?;
        }
        return Ok(());
    }

    if !args.text.is_empty() {
        let text = args.text.join(" ");
        print_normalized(&mut out, &normalizer, &text, args.trace)?;
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        print_normalized(&mut out, &normalizer, &line, args.trace)?;
    }

    Ok(())
}

fn print_normalized(
    out: &mut impl Write,
    normalizer: &TextNormalizer,
    text: &str,
    trace: bool,
) -> Result<()> {
    if trace {
        writeln!(out, "{:<28} {}", "input", text)?;
        for (pass, result) in normalizer.normalize_traced(text) {
            writeln!(out, "{:<28} {}", pass.name(), result)?;
        }
    } else {
        writeln!(out, "{}", normalizer.normalize(text))?;
    }
    Ok(())
}
