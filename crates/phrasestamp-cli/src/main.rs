use anyhow::{Context, Result};
use clap::Parser;
use phrasestamp_core::MatchRules;
use std::path::PathBuf;

mod commands;
mod config;

use config::Config;

#[derive(Debug, Parser)]
#[command(name = "phrasestamp", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Find when each phrase was spoken in a word-level transcript
    ///
    /// The transcript is a JSON array of word records, each carrying a
    /// `text` field and a `timestamp` pair of seconds:
    ///
    ///   [{"text": "picnic", "timestamp": [8.24, 8.8]}, ...]
    ///
    /// Each phrase is normalized to lowercase alphanumeric tokens and matched
    /// against a contiguous run of transcript words. Matching tolerates
    /// inflections (throw / throwing) and merged or split words, but tokens
    /// shorter than three characters must match exactly. The earliest
    /// occurrence wins.
    ///
    /// Output: one line per phrase, `'<phrase>': <start> - <end>`, or
    /// `'<phrase>': not found`. A phrase that is not found is not an error.
    Locate {
        /// Transcript JSON file (use - for stdin)
        #[arg(long, short)]
        transcript: PathBuf,

        /// Phrases to locate
        #[arg(required = true)]
        phrases: Vec<String>,

        /// Print results as a JSON array
        #[arg(long)]
        json: bool,

        /// Order results by start time instead of input order
        #[arg(long)]
        sorted: bool,

        /// Log each search step (shown when logging.level is debug)
        #[arg(long)]
        trace: bool,

        /// TOML file with matching thresholds (overrides the config file)
        #[arg(long)]
        rules: Option<PathBuf>,
    },
    /// Show the tokens a phrase normalizes to
    Tokens {
        /// Text to tokenize
        text: String,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults if it does not exist
    Init,
}

/// Load the config and start twyg. Only commands that log or match need it,
/// so a broken config file never blocks `config path|example|init`.
fn load_config() -> Result<Config> {
    let config = Config::load()?;
    twyg::setup(config.logging.clone())
        .map_err(|e| anyhow::anyhow!("Failed to set up logging: {e:?}"))?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Locate {
            transcript,
            phrases,
            json,
            sorted,
            trace,
            rules,
        } => {
            let config = load_config()?;
            let rules = match rules {
                Some(path) => MatchRules::load(&path)
                    .with_context(|| format!("Failed to load rules from {}", path.display()))?,
                None => config.matching,
            };
            let args = commands::LocateArgs {
                transcript,
                phrases,
                json,
                sorted,
                trace,
            };
            commands::run_locate(args, rules)?;
        }
        Commands::Tokens { text } => {
            commands::show_tokens(&text)?;
        }
        Commands::Config { action } => {
            let path = config::config_file_path();
            match action {
                ConfigAction::Show => commands::config::show_config(&path)?,
                ConfigAction::Path => commands::config::show_path(&path),
                ConfigAction::Example => commands::config::show_example(),
                ConfigAction::Init => commands::config::init_config(&path)?,
            }
        }
    }

    Ok(())
}
