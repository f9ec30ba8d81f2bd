//! Observation hooks for the phrase search.
//!
//! Observers see the tokens the locator works with and how each search
//! ended. They receive shared references only and cannot change the result.

use std::fmt;

use crate::model::Token;

/// Why a search produced no interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoMatchReason {
    /// The phrase was empty or blank, or there were no spans.
    EmptyInput,
    /// Every phrase fragment normalized to nothing.
    EmptyPhraseTokens,
    /// Every span's text normalized to nothing.
    EmptySourceTokens,
    /// Tokens existed but neither the window search nor the fallback hit.
    NotFound,
}

impl fmt::Display for NoMatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::EmptyInput => "empty input",
            Self::EmptyPhraseTokens => "no valid tokens in phrase",
            Self::EmptySourceTokens => "no valid source tokens",
            Self::NotFound => "no match",
        };
        f.write_str(text)
    }
}

/// Receives notifications while a phrase is being located.
pub trait SearchObserver: Send + Sync {
    /// Both token streams are ready and non-empty.
    fn on_tokens(&self, _phrase: &[String], _source: &[Token]) {}

    /// A contiguous window starting at `offset` matched every phrase token.
    fn on_window_match(&self, _offset: usize, _window: &[Token]) {}

    /// The single-token fallback matched `token`.
    fn on_fallback_match(&self, _token: &Token) {}

    /// The search ended without an interval.
    fn on_no_match(&self, _phrase: &str, _reason: NoMatchReason) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Observer that writes a trace of each search through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl SearchObserver for LogObserver {
    fn on_tokens(&self, phrase: &[String], source: &[Token]) {
        log::debug!(
            "[PhraseLocator] Searching for {:?} in {} source tokens",
            phrase,
            source.len()
        );
    }

    fn on_window_match(&self, offset: usize, window: &[Token]) {
        let words: Vec<&str> = window.iter().map(|t| t.text.as_str()).collect();
        log::debug!(
            "[PhraseLocator] Window match at token {}: {:?}",
            offset,
            words
        );
    }

    fn on_fallback_match(&self, token: &Token) {
        log::debug!(
            "[PhraseLocator] Fallback match on {:?} (span {})",
            token.text,
            token.index
        );
    }

    fn on_no_match(&self, phrase: &str, reason: NoMatchReason) {
        log::trace!("[PhraseLocator] No timestamp for {:?}: {}", phrase, reason);
    }
}
