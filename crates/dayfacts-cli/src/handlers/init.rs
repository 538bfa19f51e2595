use crate::config::Config;
use anyhow::Result;
use std::path::Path;

pub fn handle(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        let config = Config::load_from(config_path)?;
        println!("Config already exists: {}", config_path.display());
        println!("  theme      = {:?}", config.theme);
        println!("  timeout_ms = {}", config.timeout_ms);
        println!(
            "  tmdb key   = {}",
            if config.providers.tmdb_api_key.is_some() {
                "configured"
            } else {
                "not set (movies stay empty)"
            }
        );
        return Ok(());
    }

    let config = Config::default();
    config.save_to(config_path)?;

    println!("Wrote default config: {}", config_path.display());
    println!("\nNext steps:");
    println!("  dayfacts show                      # Today's facts");
    println!("  dayfacts tui                       # Interactive UI");
    println!("\nOptional: add a TMDb API key to enable the movies category,");
    println!("and set anime_enabled = true for anime premieres.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn init_writes_a_loadable_config() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        handle(&config_path)?;
        assert!(config_path.exists());

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.timeout_ms, 8_000);

        // Second run leaves the file alone.
        handle(&config_path)?;
        Ok(())
    }
}
