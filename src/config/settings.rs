//! Application settings and configuration
//!
//! Settings are read from environment variables (optionally seeded from a
//! `.env` file) with defaults suitable for local development.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::time::Duration;

/// Application environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[value(alias = "dev")]
    Development,
    #[value(alias = "stage")]
    Staging,
    #[value(alias = "prod")]
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Staging => write!(f, "staging"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Development
    }
}

impl std::str::FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" | "stage" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => anyhow::bail!(
                "Invalid environment: {}. Expected: development, staging, or production",
                s
            ),
        }
    }
}

/// Connection settings for the upstream quiz-generation service
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuizApiConfig {
    /// Base address; `/generate` is appended to it
    pub base_url: String,
    pub timeout_seconds: u64,
    pub connect_timeout_seconds: u64,
}

impl QuizApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }
}

impl Default for QuizApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/quiz".to_string(),
            timeout_seconds: 60,
            connect_timeout_seconds: 5,
        }
    }
}

/// Values the quiz page uses when the visitor leaves a field out
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct QuizPageDefaults {
    pub topic: String,
    pub difficulty: String,
    pub question_type: String,
}

impl Default for QuizPageDefaults {
    fn default() -> Self {
        Self {
            topic: "UPSC Polity".to_string(),
            difficulty: "hard".to_string(),
            question_type: "mcq".to_string(),
        }
    }
}

/// Main application settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    // App settings
    pub app_name: String,
    pub app_version: String,
    pub environment: Environment,
    pub log_level: String,

    // Server settings
    pub host: String,
    pub port: u16,

    // Upstream quiz service
    pub quiz_api: QuizApiConfig,

    // Quiz page
    pub quiz_defaults: QuizPageDefaults,
}

impl Settings {
    /// Load settings from environment variables with defaults
    ///
    /// The result is not validated; call [`Settings::validate`] once any
    /// command-line overrides have been applied.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let settings = Self {
            app_name: env_or_default("APP_NAME", &defaults.app_name),
            app_version: defaults.app_version,
            environment: env_or_default("ENVIRONMENT", "development")
                .parse()
                .unwrap_or_default(),
            log_level: env_or_default("LOG_LEVEL", &defaults.log_level),

            host: env_or_default("HOST", &defaults.host),
            port: env_or_default("PORT", "3000")
                .parse()
                .context("Invalid PORT value")?,

            quiz_api: QuizApiConfig {
                base_url: env_or_default("QUIZ_API_BASE_URL", &defaults.quiz_api.base_url),
                timeout_seconds: env_or_default("QUIZ_API_TIMEOUT_SECONDS", "60")
                    .parse()
                    .context("Invalid QUIZ_API_TIMEOUT_SECONDS value")?,
                connect_timeout_seconds: env_or_default("QUIZ_API_CONNECT_TIMEOUT_SECONDS", "5")
                    .parse()
                    .context("Invalid QUIZ_API_CONNECT_TIMEOUT_SECONDS value")?,
            },

            quiz_defaults: QuizPageDefaults {
                topic: env_or_default("QUIZ_DEFAULT_TOPIC", &defaults.quiz_defaults.topic),
                difficulty: env_or_default(
                    "QUIZ_DEFAULT_DIFFICULTY",
                    &defaults.quiz_defaults.difficulty,
                ),
                question_type: env_or_default(
                    "QUIZ_DEFAULT_TYPE",
                    &defaults.quiz_defaults.question_type,
                ),
            },
        };

        Ok(settings)
    }

    /// Validate settings
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("Port cannot be 0");
        }

        let base_url = self.quiz_api.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            anyhow::bail!(
                "QUIZ_API_BASE_URL must start with http:// or https://, got {:?}",
                base_url
            );
        }

        if self.quiz_api.timeout_seconds == 0 {
            anyhow::bail!("Quiz API timeout must be > 0");
        }
        if self.quiz_api.connect_timeout_seconds == 0 {
            anyhow::bail!("Quiz API connect timeout must be > 0");
        }

        if self.quiz_defaults.topic.trim().is_empty() {
            tracing::warn!("Default quiz topic is empty; the quiz page will send an empty topic");
        }

        Ok(())
    }

    /// Get the server address string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "smart-quiz-web".to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            environment: Environment::Development,
            log_level: "info".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            quiz_api: QuizApiConfig::default(),
            quiz_defaults: QuizPageDefaults::default(),
        }
    }
}

/// Helper function to get environment variable with default
fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.app_name, "smart-quiz-web");
        assert_eq!(settings.port, 3000);
        assert_eq!(settings.quiz_api.base_url, "http://localhost:8000/quiz");
        assert_eq!(settings.quiz_defaults.topic, "UPSC Polity");
        assert_eq!(settings.quiz_defaults.difficulty, "hard");
        assert_eq!(settings.quiz_defaults.question_type, "mcq");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!("development".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!("stage".parse::<Environment>().unwrap(), Environment::Staging);
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Production);
        assert!("qa".parse::<Environment>().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut settings = Settings::default();
        settings.quiz_api.base_url = "localhost:8000/quiz".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let mut settings = Settings::default();
        settings.port = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.quiz_api.timeout_seconds = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_load_leaves_validation_to_caller() {
        let previous = std::env::var("QUIZ_API_BASE_URL").ok();
        std::env::set_var("QUIZ_API_BASE_URL", "localhost:8000/quiz");

        let loaded = Settings::load();

        match previous {
            Some(value) => std::env::set_var("QUIZ_API_BASE_URL", value),
            None => std::env::remove_var("QUIZ_API_BASE_URL"),
        }

        let mut settings = loaded.unwrap();
        assert_eq!(settings.quiz_api.base_url, "localhost:8000/quiz");
        assert!(settings.validate().is_err());

        settings.quiz_api.base_url = "http://quiz.internal:8000/quiz".to_string();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_server_addr() {
        let settings = Settings::default();
        assert_eq!(settings.server_addr(), "0.0.0.0:3000");
    }
}
