//! Phrase location over word-level timestamps.
//!
//! The search slides a window the length of the phrase over the transcript
//! tokens and takes the first window where every position matches under
//! [`MatchRules`]. Earlier occurrences win; the scan stops at the first hit.
//! A phrase that reduces to a single token gets one more linear pass as a
//! fallback. Multi-token phrases never fall back to partial matches.

use std::fmt;

use crate::model::{MatchResult, PhraseHit, Token, WordSpan};
use crate::observer::{NoMatchReason, NoopObserver, SearchObserver};
use crate::rules::MatchRules;
use crate::tokenize;

static NOOP: NoopObserver = NoopObserver;

/// Locates phrases inside a transcript.
///
/// Holds no per-search state, so one locator can serve any number of
/// searches, from any number of threads.
#[derive(Clone, Copy)]
pub struct PhraseLocator<'a> {
    rules: MatchRules,
    observer: &'a dyn SearchObserver,
}

impl fmt::Debug for PhraseLocator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhraseLocator")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

impl Default for PhraseLocator<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> PhraseLocator<'a> {
    /// Locator with the default thresholds and no observer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: MatchRules::default(),
            observer: &NOOP,
        }
    }

    #[must_use]
    pub fn with_rules(mut self, rules: MatchRules) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn with_observer(mut self, observer: &'a dyn SearchObserver) -> Self {
        self.observer = observer;
        self
    }

    /// Find the interval of `phrase` inside `spans`.
    ///
    /// Degenerate input (no spans, blank phrase, nothing left after
    /// normalization) and searches that find nothing all return
    /// [`MatchResult::NOT_FOUND`].
    pub fn locate(&self, phrase: &str, spans: &[WordSpan]) -> MatchResult {
        if spans.is_empty() || phrase.trim().is_empty() {
            return self.decline(phrase, NoMatchReason::EmptyInput);
        }

        let phrase_tokens = tokenize::phrase_tokens(phrase);
        if phrase_tokens.is_empty() {
            return self.decline(phrase, NoMatchReason::EmptyPhraseTokens);
        }

        let source_tokens = tokenize::source_tokens(spans);
        if source_tokens.is_empty() {
            return self.decline(phrase, NoMatchReason::EmptySourceTokens);
        }

        self.observer.on_tokens(&phrase_tokens, &source_tokens);

        if let Some(offset) = self.find_window(&source_tokens, &phrase_tokens) {
            let window = &source_tokens[offset..offset + phrase_tokens.len()];
            self.observer.on_window_match(offset, window);
            if let (Some(first), Some(last)) = (window.first(), window.last()) {
                return MatchResult::found(
                    spans[first.index].interval.start,
                    spans[last.index].interval.end,
                );
            }
        }

        if let [target] = phrase_tokens.as_slice() {
            let hit = source_tokens
                .iter()
                .find(|token| self.rules.tokens_match(&token.text, target));
            if let Some(token) = hit {
                self.observer.on_fallback_match(token);
                return MatchResult::from_interval(spans[token.index].interval);
            }
        }

        self.decline(phrase, NoMatchReason::NotFound)
    }

    /// Locate each phrase in turn, keeping input order.
    pub fn locate_all<I, S>(&self, phrases: I, spans: &[WordSpan]) -> Vec<PhraseHit>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        phrases
            .into_iter()
            .map(|phrase| {
                let phrase = phrase.as_ref();
                PhraseHit::new(phrase, self.locate(phrase, spans))
            })
            .collect()
    }

    /// Offset of the leftmost window where every phrase token matches.
    fn find_window(&self, source: &[Token], phrase: &[String]) -> Option<usize> {
        if phrase.is_empty() || phrase.len() > source.len() {
            return None;
        }
        source.windows(phrase.len()).position(|window| {
            window
                .iter()
                .zip(phrase)
                .all(|(token, target)| self.rules.tokens_match(&token.text, target))
        })
    }

    fn decline(&self, phrase: &str, reason: NoMatchReason) -> MatchResult {
        self.observer.on_no_match(phrase, reason);
        MatchResult::NOT_FOUND
    }
}

/// Locate `phrase` with the default thresholds.
pub fn locate_phrase(phrase: &str, spans: &[WordSpan]) -> MatchResult {
    PhraseLocator::new().locate(phrase, spans)
}

/// Locate several phrases with the default thresholds.
pub fn locate_all<I, S>(phrases: I, spans: &[WordSpan]) -> Vec<PhraseHit>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    PhraseLocator::new().locate_all(phrases, spans)
}

/// Order hits chronologically by start time.
///
/// Unmatched phrases sort as if they started at zero. The sort is stable,
/// so ties keep their input order.
pub fn sort_by_start(hits: &mut [PhraseHit]) {
    hits.sort_by(|a, b| a.sort_key().total_cmp(&b.sort_key()));
}
