use anyhow::{Context, Result};
use phrasestamp_core::transcript::read_word_spans;
use phrasestamp_core::{
    sort_by_start, LogObserver, MatchRules, PhraseHit, PhraseLocator, WordSpan,
};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

/// Options for `phrasestamp locate`.
#[derive(Debug)]
pub struct LocateArgs {
    /// Transcript JSON file, or `-` for stdin.
    pub transcript: PathBuf,
    pub phrases: Vec<String>,
    pub json: bool,
    pub sorted: bool,
    pub trace: bool,
}

/// One output row for `--json`.
#[derive(Debug, Serialize)]
struct HitRow<'a> {
    phrase: &'a str,
    start: Option<f64>,
    end: Option<f64>,
}

impl<'a> From<&'a PhraseHit> for HitRow<'a> {
    fn from(hit: &'a PhraseHit) -> Self {
        Self {
            phrase: &hit.phrase,
            start: hit.result.start(),
            end: hit.result.end(),
        }
    }
}

/// Locate each phrase in the transcript and print where it was spoken.
///
/// Phrases that are not found are reported, not treated as errors.
pub fn run_locate(args: LocateArgs, rules: MatchRules) -> Result<()> {
    let spans = load_transcript(&args.transcript)?;
    log::debug!(
        "Loaded {} words from {}",
        spans.len(),
        args.transcript.display()
    );

    let observer = LogObserver;
    let mut locator = PhraseLocator::new().with_rules(rules);
    if args.trace {
        locator = locator.with_observer(&observer);
    }

    let mut hits = locator.locate_all(&args.phrases, &spans);
    if args.sorted {
        sort_by_start(&mut hits);
    }

    let found = hits.iter().filter(|h| h.result.is_found()).count();
    log::debug!("Located {} of {} phrases", found, hits.len());

    if args.json {
        let rows: Vec<HitRow<'_>> = hits.iter().map(HitRow::from).collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).context("Failed to serialize results")?
        );
    } else {
        for hit in &hits {
            println!("{}", format_hit(hit));
        }
    }

    Ok(())
}

fn load_transcript(path: &Path) -> Result<Vec<WordSpan>> {
    if path.as_os_str() == "-" {
        return read_word_spans(io::stdin().lock()).context("Failed to read transcript from stdin");
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open transcript {}", path.display()))?;
    read_word_spans(BufReader::new(file))
        .with_context(|| format!("Failed to parse transcript {}", path.display()))
}

fn format_hit(hit: &PhraseHit) -> String {
    format!("'{}': {}", hit.phrase, hit.result)
}
