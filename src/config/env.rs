use crate::domain::ports::ConfigProvider;
use crate::utils::error::{AirtableError, Result};
use crate::utils::validation::{validate_url, Validate};
use envconfig::Envconfig;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

pub const DEFAULT_API_URL: &str = "https://api.airtable.com/v0";

/// Connection settings read from the process environment.
///
/// The key, base id and table name are passed through untouched. Missing values
/// become empty strings and surface later as an Airtable auth or not-found error.
#[derive(Envconfig, Clone, PartialEq, Eq)]
pub struct AirtableConfig {
    #[envconfig(from = "AIRTABLE_KEY", default = "")]
    pub api_key: String,
    #[envconfig(from = "AIRTABLE_ID", default = "")]
    pub base_id: String,
    #[envconfig(from = "AIRTABLE_TABLE_NAME", default = "")]
    pub table_name: String,
    #[envconfig(from = "AIRTABLE_API_URL", default = "https://api.airtable.com/v0")]
    pub api_url: String,
}

impl AirtableConfig {
    pub fn from_env() -> Result<Self> {
        Self::init_from_env().map_err(|e| AirtableError::ConfigError {
            message: e.to_string(),
        })
    }

    pub fn from_map(vars: &HashMap<String, String>) -> Result<Self> {
        Self::init_from_hashmap(vars).map_err(|e| AirtableError::ConfigError {
            message: e.to_string(),
        })
    }
}

// Keeps the API key out of debug logs.
impl fmt::Debug for AirtableConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AirtableConfig")
            .field("api_key", &if self.api_key.is_empty() { "<empty>" } else { "<redacted>" })
            .field("base_id", &self.base_id)
            .field("table_name", &self.table_name)
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl ConfigProvider for AirtableConfig {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn base_id(&self) -> &str {
        &self.base_id
    }

    fn table_name(&self) -> &str {
        &self.table_name
    }
}

impl Validate for AirtableConfig {
    fn validate(&self) -> Result<()> {
        validate_url("AIRTABLE_API_URL", &self.api_url)
    }
}

/// Seeds the process environment from a key=value file.
///
/// Variables that are already set win over the file. Returns `false` when the
/// file does not exist.
pub fn load_env_file(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    match dotenvy::from_path(path) {
        Ok(()) => {
            tracing::debug!("Loaded environment from {}", path.display());
            Ok(true)
        }
        Err(e) if e.not_found() => {
            tracing::debug!("No env file at {}, using process environment", path.display());
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}
