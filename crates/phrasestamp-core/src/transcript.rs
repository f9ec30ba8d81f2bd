//! Decoding word-level timestamps produced by a transcription engine.
//!
//! The expected input is a JSON array of word records:
//!
//! ```json
//! [
//!   { "text": "picnic", "timestamp": [8.24, 8.8] },
//!   { "text": "area", "timestamp": [8.8, 9.48] }
//! ]
//! ```
//!
//! Records that carry `start`/`end` fields instead of a `timestamp` pair are
//! accepted too. Bad intervals never fail the decode: a missing or malformed
//! interval, including one with a single non-numeric bound, becomes
//! `(0.0, 0.0)`.

use serde::Deserialize;
use serde_json::Value;
use std::io::Read;

use crate::error::Result;
use crate::model::{Interval, WordSpan};

#[derive(Debug, Deserialize)]
struct RawWord {
    #[serde(default)]
    text: Option<Value>,
    #[serde(default)]
    timestamp: Option<Value>,
    #[serde(default)]
    start: Option<Value>,
    #[serde(default)]
    end: Option<Value>,
}

impl RawWord {
    fn into_span(self) -> WordSpan {
        let text = match self.text {
            Some(Value::String(text)) => text,
            _ => String::new(),
        };
        let interval = match &self.timestamp {
            Some(timestamp) => interval_from_pair(timestamp),
            None => interval_from_bounds(self.start.as_ref(), self.end.as_ref()),
        };
        WordSpan::with_interval(text, interval.unwrap_or(Interval::ZERO))
    }
}

fn interval_from_pair(value: &Value) -> Option<Interval> {
    match value.as_array()?.as_slice() {
        [start, end, ..] => interval_from_bounds(Some(start), Some(end)),
        _ => None,
    }
}

fn interval_from_bounds(start: Option<&Value>, end: Option<&Value>) -> Option<Interval> {
    let start = start?.as_f64()?;
    let end = end?.as_f64()?;
    Some(Interval::new(start, end))
}

/// Decode a JSON array of word records.
///
/// # Errors
/// Fails only when the text is not JSON or the top level is not an array of
/// records.
pub fn parse_word_spans(json: &str) -> Result<Vec<WordSpan>> {
    let raw: Vec<RawWord> = serde_json::from_str(json)?;
    Ok(raw.into_iter().map(RawWord::into_span).collect())
}

/// Decode word records from a reader.
pub fn read_word_spans<R: Read>(reader: R) -> Result<Vec<WordSpan>> {
    let raw: Vec<RawWord> = serde_json::from_reader(reader)?;
    Ok(raw.into_iter().map(RawWord::into_span).collect())
}
