//! Fuzzy token comparison rules.
//!
//! Two normalized tokens match when any of these holds:
//!
//! 1. they are equal;
//! 2. the shorter one is a prefix of the longer one and is at least
//!    `min_prefix_len` characters long (plurals, verb tenses);
//! 3. the target is at least `min_containment_len` characters long and one
//!    token contains the other (words merged or split by the transcriber).
//!
//! Tokens shorter than `min_prefix_len` only ever match exactly, so "a"
//! never matches "an", "at" or "plate".
//!
//! # Example
//!
//! ```
//! use phrasestamp_core::MatchRules;
//!
//! let rules = MatchRules::default();
//! assert!(rules.tokens_match("throw", "throwing"));
//! assert!(!rules.tokens_match("a", "an"));
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Shortest shared prefix accepted as an inflection match.
pub const DEFAULT_MIN_PREFIX_LEN: usize = 3;

/// Shortest target token eligible for substring matching.
pub const DEFAULT_MIN_CONTAINMENT_LEN: usize = 4;

/// Length thresholds for fuzzy token matching.
///
/// Loaded from the `[matching]` table of the config file, from
/// `PHRASESTAMP_MATCHING_*` environment variables, or from a standalone TOML
/// file; missing keys fall back to the defaults. Thresholds may be written as
/// integers or as numeric strings, since environment values arrive as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchRules {
    #[serde(deserialize_with = "threshold")]
    pub min_prefix_len: usize,
    #[serde(deserialize_with = "threshold")]
    pub min_containment_len: usize,
}

fn threshold<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(usize),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text.trim().parse().map_err(|_| {
            serde::de::Error::custom(format!("expected a non-negative integer, got {text:?}"))
        }),
    }
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            min_prefix_len: DEFAULT_MIN_PREFIX_LEN,
            min_containment_len: DEFAULT_MIN_CONTAINMENT_LEN,
        }
    }
}

impl MatchRules {
    /// Load rules from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or holds a zero
    /// threshold.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse rules from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let rules: Self = toml::from_str(content)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Reject thresholds that would let unrelated tokens match.
    pub fn validate(&self) -> Result<()> {
        if self.min_prefix_len == 0 {
            return Err(Error::InvalidRules(
                "min_prefix_len must be at least 1".to_string(),
            ));
        }
        if self.min_containment_len == 0 {
            return Err(Error::InvalidRules(
                "min_containment_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Compare a transcript token against a phrase token.
    ///
    /// `source` comes from the transcript, `target` from the phrase. Both
    /// are expected to be normalized already.
    #[must_use]
    pub fn tokens_match(&self, source: &str, target: &str) -> bool {
        if source == target {
            return true;
        }

        let shared = source.len().min(target.len());
        if shared < self.min_prefix_len {
            return false;
        }

        if source.as_bytes()[..shared] == target.as_bytes()[..shared] {
            return true;
        }

        target.len() >= self.min_containment_len
            && (source.contains(target) || target.contains(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_thresholds() {
        let rules = MatchRules::default();
        assert_eq!(rules.min_prefix_len, 3);
        assert_eq!(rules.min_containment_len, 4);
    }

    #[test]
    fn test_tokens_match_table() {
        let rules = MatchRules::default();
        let cases = [
            // exact
            ("eating", "eating", true),
            ("a", "a", true),
            ("on", "on", true),
            // prefix covering the shorter token
            ("throw", "throwing", true),
            ("benches", "bench", true),
            ("are", "area", true),
            ("eat", "eating", true),
            // short tokens never go fuzzy
            ("a", "an", false),
            ("a", "at", false),
            ("an", "a", false),
            ("a", "plate", false),
            ("it", "item", false),
            ("ea", "eating", false),
            // containment needs a target of four or more
            ("foodtruck", "truck", true),
            ("truck", "foodtruck", true),
            ("picnicarea", "area", true),
            ("ate", "eat", false),
            ("heat", "eat", false),
            // unrelated
            ("plate", "place", false),
            ("waiting", "wiping", false),
        ];
        for (source, target, expected) in cases {
            assert_eq!(
                rules.tokens_match(source, target),
                expected,
                "tokens_match({source:?}, {target:?})"
            );
        }
    }

    #[test]
    fn test_containment_is_gated_on_target_length() {
        let rules = MatchRules::default();
        // "eat" sits inside "heat" but the target is only three long
        assert!(!rules.tokens_match("heat", "eat"));
        // the same pair with the roles swapped clears the threshold
        assert!(rules.tokens_match("eat", "heat"));
    }

    #[test]
    fn test_custom_thresholds() {
        let strict = MatchRules {
            min_prefix_len: 5,
            min_containment_len: 8,
        };
        assert!(!strict.tokens_match("eat", "eating"));
        assert!(strict.tokens_match("throw", "throwing"));
        assert!(!strict.tokens_match("foodtruck", "truck"));
    }

    #[test]
    fn test_from_toml_str_partial() {
        let rules = MatchRules::from_toml_str("min_prefix_len = 4\n").unwrap();
        assert_eq!(rules.min_prefix_len, 4);
        assert_eq!(rules.min_containment_len, 4);

        let empty = MatchRules::from_toml_str("").unwrap();
        assert_eq!(empty, MatchRules::default());
    }

    #[test]
    fn test_from_toml_str_rejects_zero() {
        let result = MatchRules::from_toml_str("min_containment_len = 0\n");
        assert!(matches!(result, Err(Error::InvalidRules(_))));
    }

    #[test]
    fn test_from_toml_str_rejects_garbage() {
        let result = MatchRules::from_toml_str("min_prefix_len = \"three\"\n");
        assert!(matches!(result, Err(Error::Toml(_))));

        let result = MatchRules::from_toml_str("min_prefix_len = -1\n");
        assert!(matches!(result, Err(Error::Toml(_))));
    }

    #[test]
    fn test_thresholds_accept_numeric_strings() {
        let rules =
            MatchRules::from_toml_str("min_prefix_len = '4'\nmin_containment_len = \" 6 \"\n")
                .unwrap();
        assert_eq!(rules.min_prefix_len, 4);
        assert_eq!(rules.min_containment_len, 6);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "min_prefix_len = 3").unwrap();
        writeln!(file, "min_containment_len = 6").unwrap();

        let rules = MatchRules::load(&path).unwrap();
        assert_eq!(rules.min_containment_len, 6);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = MatchRules::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
