use anyhow::{Context, Result};
use confyg::{env, Confygery};
use phrasestamp_core::MatchRules;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Prefix for environment overrides, e.g. `PHRASESTAMP_MATCHING_MIN_PREFIX_LEN`.
pub const ENV_PREFIX: &str = "phrasestamp";

/// Config tables that can be overridden from the environment.
const ENV_SECTIONS: &[&str] = &["matching"];

/// Configuration for phrasestamp.
///
/// Sources, highest priority first:
/// 1. CLI arguments (`locate --rules`)
/// 2. Environment variables (`PHRASESTAMP_<TABLE>_<KEY>`)
/// 3. Config file (`<config dir>/phrasestamp/config.toml`)
/// 4. Built-in defaults
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Logger options passed straight to twyg.
    #[serde(default)]
    pub logging: twyg::Opts,

    /// Fuzzy matching thresholds.
    ///
    /// Can be set via:
    /// - CLI: --rules /path/to/rules.toml
    /// - ENV: PHRASESTAMP_MATCHING_MIN_PREFIX_LEN, PHRASESTAMP_MATCHING_MIN_CONTAINMENT_LEN
    /// - Config: [matching] table
    #[serde(default)]
    pub matching: MatchRules,
}

impl Config {
    /// Load configuration from the default config file and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed, or
    /// if it holds invalid matching thresholds.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path(), ENV_PREFIX)
    }

    /// Load configuration from `path` (skipped when absent), then apply
    /// environment variables named `<ENV_PREFIX>_<TABLE>_<KEY>`.
    pub fn load_from(path: &Path, env_prefix: &str) -> Result<Self> {
        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if path.exists() {
            let path_str = path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .with_context(|| format!("Failed to load config file {}", path.display()))?;
        }

        let mut env_opts = env::Options::with_top_level(env_prefix);
        for section in ENV_SECTIONS {
            env_opts.add_section(*section);
        }
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;
        config
            .matching
            .validate()
            .context("Invalid [matching] section")?;

        Ok(config)
    }
}

/// Where phrasestamp keeps its config file.
///
/// Uses the platform config directory (`~/.config` on Linux,
/// `~/Library/Application Support` on macOS, `%APPDATA%` on Windows) and
/// falls back to the working directory when there is none.
pub fn config_file_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_default();
    base.join(ENV_PREFIX).join("config.toml")
}

/// Commented starter config, also printed by `phrasestamp config example`.
pub fn example_config() -> &'static str {
    r#"# Phrasestamp Configuration File
#
# Sources, highest priority first:
# 1. CLI arguments (locate --rules)
# 2. Environment variables (PHRASESTAMP_<TABLE>_<KEY>)
# 3. This config file
# 4. Built-in defaults

# Logging options, passed through to twyg
#
#[logging]
#coloured = true
#level = "debug"

# Fuzzy matching thresholds
#
# Tokens shorter than min_prefix_len only match exactly. Longer tokens also
# match when the shorter one is a prefix of the longer one.
#
# When the phrase token is at least min_containment_len long, a transcript
# token that contains it (or is contained by it) also matches.
#
# Environment: PHRASESTAMP_MATCHING_MIN_PREFIX_LEN=4
# Per run:     phrasestamp locate --rules /path/to/rules.toml ...
[matching]
min_prefix_len = 3
min_containment_len = 4
"#
}

/// Write the starter config to `path` unless a file is already there.
///
/// Returns whether a file was written.
pub fn write_example_config(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    std::fs::write(path, example_config())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.matching, MatchRules::default());
    }

    #[test]
    fn test_config_file_path() {
        let path = config_file_path();
        assert!(path.ends_with("phrasestamp/config.toml"));
    }

    #[test]
    fn test_config_load() {
        // works whether or not the user has a config file
        assert!(Config::load().is_ok());
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml"), "pstamp_test_none").unwrap();
        assert_eq!(config.matching, MatchRules::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[matching]\nmin_prefix_len = 5\n").unwrap();

        let config = Config::load_from(&path, "pstamp_test_file").unwrap();
        assert_eq!(config.matching.min_prefix_len, 5);
        assert_eq!(config.matching.min_containment_len, 4);
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[matching]\nmin_prefix_len = 5\nmin_containment_len = 6\n")
            .unwrap();
        std::env::set_var("PSTAMP_TEST_ENV_MATCHING_MIN_PREFIX_LEN", "4");

        let config = Config::load_from(&path, "pstamp_test_env").unwrap();
        assert_eq!(config.matching.min_prefix_len, 4);
        assert_eq!(config.matching.min_containment_len, 6);

        // the override reaches the matcher: "eat" no longer matches "eating"
        assert!(!config.matching.tokens_match("eat", "eating"));
    }

    #[test]
    fn test_env_without_file() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("PSTAMP_TEST_ENV_ONLY_MATCHING_MIN_CONTAINMENT_LEN", "7");

        let config =
            Config::load_from(&dir.path().join("absent.toml"), "pstamp_test_env_only").unwrap();
        assert_eq!(config.matching.min_prefix_len, 3);
        assert_eq!(config.matching.min_containment_len, 7);
    }

    #[test]
    fn test_invalid_env_threshold_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("PSTAMP_TEST_BAD_MATCHING_MIN_PREFIX_LEN", "three");

        let result = Config::load_from(&dir.path().join("absent.toml"), "pstamp_test_bad");
        assert!(result.is_err());
    }

    #[test]
    fn test_write_example_config_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        assert!(write_example_config(&path).unwrap());
        assert!(!write_example_config(&path).unwrap());

        let config = Config::load_from(&path, "pstamp_test_example").unwrap();
        assert_eq!(config.matching, MatchRules::default());
    }
}
