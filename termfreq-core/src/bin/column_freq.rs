//! Column Frequency Tool
//!
//! Reads one spreadsheet column exported as plain text (one cell per line) and
//! prints the most frequent words or phrases.
//!
//! ## Usage
//!
//! ```bash
//! # Top 20 single words, default stopwords
//! ./target/release/column_freq headlines.txt
//!
//! # Bigrams and trigrams, top 10, with extra stopwords
//! ./target/release/column_freq headlines.txt -n 2,3 -t 10 -s "شرکت,سازمان"
//!
//! # Read stdin, export TSV
//! cut -f3 survey.tsv | ./target/release/column_freq --skip-header -f tsv > freq.tsv
//! ```
//!
//! Blank lines are treated as missing cells. Set `RUST_LOG=debug` to see the
//! per-request summary on stderr.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use termfreq_core::compute_frequencies;
use termfreq_types::{AnalysisConfig, FrequencyReport, NGram, RawCell};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "column_freq")]
#[command(about = "Rank the most frequent words or phrases of a text column")]
struct Cli {
    /// Input file, one cell per line. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Phrase sizes to report (1, 2, 3), comma separated.
    #[arg(long, short = 'n', value_delimiter = ',', default_value = "1")]
    ngram: Vec<u8>,

    /// Number of phrases to keep per report.
    #[arg(long, short, default_value_t = 20)]
    top: usize,

    /// Extra stopwords, comma separated.
    #[arg(long, short, default_value = "")]
    stopwords: String,

    /// Minimum token length in characters.
    #[arg(long, short, default_value_t = 2)]
    min_length: usize,

    /// Fold Arabic Yeh/Kaf onto the Persian letters before counting.
    #[arg(long)]
    fold_arabic: bool,

    /// Ignore the first line (column header).
    #[arg(long)]
    skip_header: bool,

    /// Output format.
    #[arg(long, short, value_enum, default_value_t = Format::Table)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Tsv,
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let ngrams = cli
        .ngram
        .iter()
        .map(|&n| NGram::try_from(n))
        .collect::<Result<Vec<_>, _>>()?;

    let config = AnalysisConfig {
        ngram: ngrams.first().copied().unwrap_or(NGram::Unigram),
        top_n: cli.top,
        custom_stopwords: cli.stopwords,
        min_length: cli.min_length,
        fold_arabic_letters: cli.fold_arabic,
    };
    config.validate()?;

    let text = read_input(cli.input.as_ref())?;
    let cells = to_cells(&text, cli.skip_header);
    tracing::info!(rows = cells.len(), "column loaded");

    let reports = compute_frequencies(&cells, &ngrams, &config)?;

    match cli.format {
        Format::Table => reports.iter().for_each(print_table),
        Format::Tsv => print_tsv(&reports),
        Format::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
    }

    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn to_cells(text: &str, skip_header: bool) -> Vec<RawCell> {
    text.lines()
        .skip(usize::from(skip_header))
        .map(|line| {
            if line.trim().is_empty() {
                RawCell::Missing
            } else {
                RawCell::from(line)
            }
        })
        .collect()
}

fn print_table(report: &FrequencyReport) {
    println!("=== {} frequencies ===", report.ngram);

    if report.is_empty() {
        println!("no phrases found\n");
        return;
    }

    let width = report
        .rows
        .iter()
        .map(|r| r.phrase.chars().count())
        .max()
        .unwrap_or(0);

    println!("{:>4}  {:<width$}  {:>8}", "rank", "phrase", "count");
    println!("--------------------------------");
    for row in &report.rows {
        println!(
            "{:>4}  {:<width$}  {:>8}",
            row.rank,
            row.phrase,
            fmt_count(row.count)
        );
    }
    println!("--------------------------------");
    println!("Total (shown) : {}", fmt_count(report.total_in_returned_rows));
    println!("Unique        : {}", fmt_count(report.unique_phrases as u64));
    if report.is_truncated() {
        println!("Total (all)   : {}", fmt_count(report.total_occurrences));
    }
    println!();
}

fn print_tsv(reports: &[FrequencyReport]) {
    println!("ngram\trank\tphrase\tcount");
    for report in reports {
        for row in &report.rows {
            println!(
                "{}\t{}\t{}\t{}",
                u8::from(report.ngram),
                row.rank,
                row.phrase,
                row.count
            );
        }
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
