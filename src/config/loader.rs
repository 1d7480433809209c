// Configuration file loading and creation

use super::types::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Get the path to the configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("pong");
    path.push("config.toml");
    path
}

/// Load configuration from file, or create default if it doesn't exist
pub fn load_config() -> Result<Config> {
    load_config_from(&get_config_path())
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        create_default_config(path)?;
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    Ok(parse_config(&contents))
}

/// Parse config text; a malformed file falls back to the defaults
pub fn parse_config(contents: &str) -> Config {
    match toml::from_str(contents) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to parse config file: {}", e);
            eprintln!("Using default configuration");
            warn!(error = %e, "config parse failed, using defaults");
            Config::default()
        }
    }
}

/// Create a default configuration file with helpful comments
pub fn create_default_config(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating config directory {}", dir.display()))?;
    }

    let config = Config::default();
    let toml_string = toml::to_string_pretty(&config).context("serializing default config")?;

    let commented_toml = format!(
        "# Pong Configuration File\n\
         # Restart the game after editing for changes to take effect\n\
         #\n\
         # Key binding format: \"Up\", \"Down\", \"Left\", \"Right\", \"Enter\", \"Esc\", \"Space\"\n\
         #                     or single characters like \"W\", \"S\", \"Q\"\n\
         #\n\
         # Colors: RGB values from 0-255\n\
         #\n\
         # Opponent control: \"scripted\" (vs computer) or \"keyboard\" (two players)\n\n\
         {}",
        toml_string
    );

    fs::write(path, commented_toml)
        .with_context(|| format!("writing default config to {}", path.display()))?;
    Ok(())
}
