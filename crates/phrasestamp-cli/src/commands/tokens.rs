use anyhow::Result;
use phrasestamp_core::tokenize;

/// Print the normalized tokens a phrase reduces to, one per line.
pub fn show_tokens(text: &str) -> Result<()> {
    let tokens = tokenize::phrase_tokens(text);

    if tokens.is_empty() {
        println!("(no tokens)");
        return Ok(());
    }

    for token in tokens {
        println!("{token}");
    }

    Ok(())
}
