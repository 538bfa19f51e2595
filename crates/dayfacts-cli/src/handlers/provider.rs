use crate::config::Config;
use anyhow::Result;
use dayfacts_providers::get_all_providers;
use std::path::Path;

pub fn list(config_path: &Path) -> Result<()> {
    let config = Config::load_from(config_path)?;

    println!("{:<12} {:<10} ENDPOINT", "PROVIDER", "STATUS");
    println!("{}", "-".repeat(72));

    for provider in get_all_providers() {
        let status = match provider.name {
            "tmdb" if config.providers.tmdb_api_key.is_none() => "no key",
            "jikan" if !config.providers.anime_enabled => "disabled",
            _ => "ready",
        };
        println!(
            "{:<12} {:<10} {}",
            provider.name, status, provider.base_url
        );
    }

    println!("\n{}", "-".repeat(72));
    for provider in get_all_providers() {
        println!("{:<12} {}", provider.name, provider.description);
    }

    Ok(())
}
