use dioxus::prelude::use_context;
use tracing::{info, warn};

use crate::openlibrary::DEFAULT_RESULT_LIMIT;

pub const DEFAULT_API_URL: &str = "https://openlibrary.org";
pub const DEFAULT_COVERS_URL: &str = "https://covers.openlibrary.org";

/// Application configuration
/// In debug builds: loads a .env file first, then reads the environment
/// In release builds: reads the environment only
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Base URL of the Open Library site (search endpoint and work pages)
    pub api_url: String,
    /// Base URL of the cover image service
    pub covers_url: String,
    /// Maximum number of results requested per search
    pub result_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            covers_url: DEFAULT_COVERS_URL.to_string(),
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Config: Dev mode activated - loaded .env file");
            } else {
                info!("Config: No .env file found, using environment only");
            }
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from a variable lookup, falling back to defaults for
    /// anything missing or malformed
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_url = lookup("BOOK_FINDER_API_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.api_url);

        let covers_url = lookup("BOOK_FINDER_COVERS_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.covers_url);

        let result_limit = match lookup("BOOK_FINDER_RESULT_LIMIT") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(limit) if limit > 0 => limit,
                _ => {
                    warn!(
                        "Config: Ignoring invalid BOOK_FINDER_RESULT_LIMIT '{}', using {}",
                        raw, defaults.result_limit
                    );
                    defaults.result_limit
                }
            },
            None => defaults.result_limit,
        };

        info!(
            "Config: api_url={}, covers_url={}, result_limit={}",
            api_url, covers_url, result_limit
        );

        Self {
            api_url,
            covers_url,
            result_limit,
        }
    }
}

/// Config handed to the launcher with `LaunchBuilder::with_context`
pub fn use_config() -> Config {
    use_context::<Config>()
}
