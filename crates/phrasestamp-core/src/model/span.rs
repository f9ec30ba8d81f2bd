use std::fmt;

/// A time range in the source audio, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    /// Placeholder used when an upstream interval is missing or malformed.
    pub const ZERO: Self = Self {
        start: 0.0,
        end: 0.0,
    };

    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// A single transcribed word and the interval in which it was spoken.
///
/// Spans are produced upstream by a transcription engine and arrive in
/// chronological order. The same word may appear many times.
#[derive(Debug, Clone, PartialEq)]
pub struct WordSpan {
    pub text: String,
    pub interval: Interval,
}

impl WordSpan {
    #[must_use]
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            interval: Interval::new(start, end),
        }
    }

    #[must_use]
    pub fn with_interval(text: impl Into<String>, interval: Interval) -> Self {
        Self {
            text: text.into(),
            interval,
        }
    }
}
