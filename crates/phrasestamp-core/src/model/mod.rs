pub mod hit;
pub mod span;
pub mod token;

pub use hit::{MatchResult, PhraseHit};
pub use span::{Interval, WordSpan};
pub use token::Token;
