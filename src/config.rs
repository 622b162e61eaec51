use crate::error::{BoardError, Result};
use crate::provider::http::DEFAULT_API_URL;
use std::path::PathBuf;

pub const API_URL_ENV: &str = "QUICKBOARD_API_URL";
pub const HOME_ENV: &str = "QUICKBOARD_HOME";

/// Where board data comes from and where settings are kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub api_url: String,
    /// Directory that holds the `.quickboard` settings folder
    pub data_dir: PathBuf,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            data_dir: PathBuf::from("."),
        }
    }
}

impl BoardConfig {
    /// Defaults overridden by `QUICKBOARD_API_URL` and `QUICKBOARD_HOME`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Rejects an API URL that is not http(s)
    pub fn validate(self) -> Result<Self> {
        let url = self.api_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(BoardError::ConfigError(format!(
                "API URL must start with http:// or https://, got '{}'",
                self.api_url
            )));
        }
        Ok(self)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(v) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config.api_url = v;
        }
        if let Some(v) = lookup(HOME_ENV).filter(|v| !v.trim().is_empty()) {
            config.data_dir = PathBuf::from(v);
        }

        config.validate()
    }
}
