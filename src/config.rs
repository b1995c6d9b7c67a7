// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Directory the static front end is served from
    pub static_dir: String,
    /// Frontend URL allowed by CORS (when the UI is served elsewhere in dev)
    pub frontend_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every setting has a default, so a bare environment works for local
    /// development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT"))?,
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
        })
    }

    /// Default config for tests.
    pub fn test_default() -> Self {
        Self {
            port: 8080,
            static_dir: "static".to_string(),
            frontend_url: "http://localhost:8080".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
