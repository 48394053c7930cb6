//! Explicit run configuration. Environment variables are read once, here,
//! into a plain struct handed to the collaborators; nothing else in the
//! crate touches the process environment.

use thiserror::Error;

const ENV_API_KEY: &str = "API_KEY";
const ENV_SPREADSHEET_ID: &str = "SPREADSHEET_ID";
const ENV_RANGE: &str = "RANGE";
const ENV_SUMMARY_API_KEY: &str = "SUMMARY_API_KEY";
const ENV_SUMMARY_ENDPOINT: &str = "SUMMARY_ENDPOINT";
const ENV_SUMMARY_MODEL: &str = "SUMMARY_MODEL";

const DEFAULT_SUMMARY_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_SUMMARY_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing required environment variable `{0}`")]
    Missing(&'static str),
    #[error("environment variable `{name}` is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Settings for the optional narrative summarizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryConfig {
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
}

/// Everything one report run needs from the outside world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub api_key: String,
    pub spreadsheet_id: String,
    /// Cell suffix appended to the period name, e.g. `!A2:C13`.
    pub cell_suffix: String,
    /// Present only when a summary API key is configured.
    pub summary: Option<SummaryConfig>,
}

impl ReportConfig {
    /// Loads configuration from the process environment, honoring a local
    /// `.env` file when one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| -> Result<String, ConfigError> {
            match lookup(name) {
                Some(value) if !value.trim().is_empty() => Ok(value),
                _ => Err(ConfigError::Missing(name)),
            }
        };

        let cell_suffix = required(ENV_RANGE)?;
        if !cell_suffix.starts_with('!') {
            return Err(ConfigError::Invalid {
                name: ENV_RANGE,
                reason: format!("`{cell_suffix}` must start with `!`, e.g. `!A2:C13`"),
            });
        }

        let summary = lookup(ENV_SUMMARY_API_KEY)
            .filter(|key| !key.trim().is_empty())
            .map(|api_key| SummaryConfig {
                endpoint: lookup(ENV_SUMMARY_ENDPOINT)
                    .unwrap_or_else(|| DEFAULT_SUMMARY_ENDPOINT.to_string()),
                api_key,
                model: lookup(ENV_SUMMARY_MODEL)
                    .unwrap_or_else(|| DEFAULT_SUMMARY_MODEL.to_string()),
            });

        Ok(Self {
            api_key: required(ENV_API_KEY)?,
            spreadsheet_id: required(ENV_SPREADSHEET_ID)?,
            cell_suffix,
            summary,
        })
    }
}
