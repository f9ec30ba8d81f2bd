use std::fmt;

use crate::model::span::Interval;

/// Outcome of a phrase search.
///
/// Both bounds are present or both are absent; there is no partial result.
/// An absent result means "timestamp unknown" and is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MatchResult {
    interval: Option<Interval>,
}

impl MatchResult {
    pub const NOT_FOUND: Self = Self { interval: None };

    #[must_use]
    pub const fn found(start: f64, end: f64) -> Self {
        Self {
            interval: Some(Interval::new(start, end)),
        }
    }

    #[must_use]
    pub const fn from_interval(interval: Interval) -> Self {
        Self {
            interval: Some(interval),
        }
    }

    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.interval.is_some()
    }

    #[must_use]
    pub const fn interval(&self) -> Option<Interval> {
        self.interval
    }

    #[must_use]
    pub fn start(&self) -> Option<f64> {
        self.interval.map(|i| i.start)
    }

    #[must_use]
    pub fn end(&self) -> Option<f64> {
        self.interval.map(|i| i.end)
    }

    /// Split into the `(start, end)` pair handed to downstream storage.
    #[must_use]
    pub fn into_pair(self) -> (Option<f64>, Option<f64>) {
        (self.start(), self.end())
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.interval {
            Some(interval) => write!(f, "{interval}"),
            None => write!(f, "not found"),
        }
    }
}

/// A phrase paired with where it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct PhraseHit {
    pub phrase: String,
    pub result: MatchResult,
}

impl PhraseHit {
    #[must_use]
    pub fn new(phrase: impl Into<String>, result: MatchResult) -> Self {
        Self {
            phrase: phrase.into(),
            result,
        }
    }

    /// Key for chronological ordering. Unmatched phrases sort as time zero.
    #[must_use]
    pub fn sort_key(&self) -> f64 {
        self.result.start().unwrap_or(0.0)
    }
}
