//! Core phrase locator for phrasestamp.
//!
//! This crate finds where a phrase was spoken inside a sequence of
//! word-level transcription timestamps. Matching is fuzzy at the token
//! level (inflections, merged or split words) but strict about word order:
//! a multi-word phrase only matches a contiguous run of words.
//!
//! ```
//! use phrasestamp_core::{locate_phrase, WordSpan};
//!
//! let spans = vec![
//!     WordSpan::new("picnic", 8.24, 8.8),
//!     WordSpan::new("area", 8.8, 9.48),
//! ];
//! let result = locate_phrase("picnic area", &spans);
//! assert_eq!(result.into_pair(), (Some(8.24), Some(9.48)));
//! ```

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod locate;
pub mod model;
pub mod observer;
pub mod rules;
pub mod tokenize;
pub mod transcript;

pub use error::{Error, Result};
pub use locate::{locate_all, locate_phrase, sort_by_start, PhraseLocator};
pub use model::{Interval, MatchResult, PhraseHit, Token, WordSpan};
pub use observer::{LogObserver, NoMatchReason, NoopObserver, SearchObserver};
pub use rules::MatchRules;
