/// A normalized word from the transcript, tied back to the span it came from.
///
/// `index` is a position in the caller's `WordSpan` slice. Spans whose text
/// normalizes to nothing are dropped, so indices are increasing but not
/// necessarily contiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub index: usize,
}

impl Token {
    #[must_use]
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
        }
    }
}
