use crate::config::types::{Config, OutputConfig, ScraperConfig, ServerConfig};
use crate::ConfigError;
use std::net::SocketAddr;

/// Longest accepted fetch timeout (seconds)
const MAX_TIMEOUT_SECS: u64 = 300;

/// Longest accepted pause between sites (milliseconds)
const MAX_DELAY_MS: u64 = 60_000;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_scraper_config(&config.scraper)?;
    validate_output_config(&config.output)?;
    validate_server_config(&config.server)?;
    Ok(())
}

/// Validates fetch and pacing settings
fn validate_scraper_config(config: &ScraperConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 || config.timeout_secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and {}, got {}",
            MAX_TIMEOUT_SECS, config.timeout_secs
        )));
    }

    if config.delay_ms > MAX_DELAY_MS {
        return Err(ConfigError::Validation(format!(
            "delay-ms must be <= {}ms, got {}ms",
            MAX_DELAY_MS, config.delay_ms
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.csv_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "csv-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates that host and port form a bindable socket address
fn validate_server_config(config: &ServerConfig) -> Result<(), ConfigError> {
    config
        .bind_address()
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::InvalidAddress(format!("{}: {}", config.bind_address(), e)))?;

    Ok(())
}
