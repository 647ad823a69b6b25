use thiserror::Error;

#[derive(Error, Debug)]
pub enum AirtableError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Env file error: {0}")]
    EnvFileError(#[from] dotenvy::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Airtable returned {status} {kind}: {message}")]
    RemoteError {
        status: u16,
        kind: String,
        message: String,
    },
}

impl AirtableError {
    /// 401/403 from Airtable, usually a missing or revoked API key.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, AirtableError::RemoteError { status: 401 | 403, .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AirtableError::RemoteError { status: 404, .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AirtableError::RemoteError { .. } if self.is_auth_error() => format!(
                "Airtable rejected the credentials, check AIRTABLE_KEY ({})",
                self
            ),
            AirtableError::RemoteError { .. } if self.is_not_found() => format!(
                "Base or table not found, check AIRTABLE_ID and AIRTABLE_TABLE_NAME ({})",
                self
            ),
            AirtableError::HttpError(e) if e.is_connect() || e.is_timeout() => {
                format!("Could not reach Airtable: {}", e)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AirtableError>;
