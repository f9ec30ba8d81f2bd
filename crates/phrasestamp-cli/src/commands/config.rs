use anyhow::Result;
use std::path::Path;

use crate::config::{self, Config};

/// Print the effective configuration after file and environment are merged.
pub fn show_config(path: &Path) -> Result<()> {
    let config = Config::load_from(path, config::ENV_PREFIX)?;
    let source = if path.exists() {
        "file + environment"
    } else {
        "defaults + environment (no config file)"
    };

    println!("Config file: {}", path.display());
    println!("Source:      {source}\n");
    println!("[matching]");
    println!("  min_prefix_len      = {}", config.matching.min_prefix_len);
    println!("  min_containment_len = {}", config.matching.min_containment_len);
    println!("[logging]");
    println!("  {:?}", config.logging);

    Ok(())
}

/// Print the config file location, whether or not it exists.
pub fn show_path(path: &Path) {
    println!("{}", path.display());
}

/// Print the starter config.
pub fn show_example() {
    print!("{}", config::example_config());
}

/// Write the starter config unless one is already in place. An existing
/// file is left untouched, even if it does not parse.
pub fn init_config(path: &Path) -> Result<()> {
    if config::write_example_config(path)? {
        println!("✓ Created config file: {}", path.display());
    } else {
        println!("Config file already exists: {}", path.display());
    }
    Ok(())
}
