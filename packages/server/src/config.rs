use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

use crate::domains::events::DispatchMode;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub dispatch_mode: DispatchMode,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            dispatch_mode: env::var("WEBHOOK_DISPATCH_MODE")
                .unwrap_or_else(|_| "action-tag".to_string())
                .parse()
                .context("WEBHOOK_DISPATCH_MODE must be 'action-tag' or 'legacy'")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::domains::events::DispatchMode;

    #[test]
    fn dispatch_mode_parses_known_values() {
        assert_eq!(
            "action-tag".parse::<DispatchMode>().unwrap(),
            DispatchMode::ActionTag
        );
        assert_eq!(
            "legacy".parse::<DispatchMode>().unwrap(),
            DispatchMode::Legacy
        );
    }

    #[test]
    fn dispatch_mode_rejects_unknown_values() {
        assert!("auto".parse::<DispatchMode>().is_err());
        assert!("".parse::<DispatchMode>().is_err());
    }
}
