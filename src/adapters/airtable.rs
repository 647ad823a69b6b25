use crate::core::{ConfigProvider, ListRecordsQuery, ListRecordsResponse, Record, RecordSource};
use crate::utils::error::{AirtableError, Result};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

/// Thin client for the Airtable "list records" endpoint.
pub struct AirtableClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> AirtableClient<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// `{api_url}/{base_id}/{table_name}` with each identifier percent-encoded
    /// as a single path segment.
    pub fn records_url(&self) -> Result<Url> {
        let mut url = Url::parse(self.config.api_url()).map_err(|e| {
            AirtableError::InvalidConfigValueError {
                field: "AIRTABLE_API_URL".to_string(),
                value: self.config.api_url().to_string(),
                reason: format!("Invalid URL format: {}", e),
            }
        })?;

        url.path_segments_mut()
            .map_err(|_| AirtableError::ConfigError {
                message: format!("{} cannot be used as a base URL", self.config.api_url()),
            })?
            .pop_if_empty()
            .push(self.config.base_id())
            .push(self.config.table_name());

        Ok(url)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Detailed {
        #[serde(rename = "type")]
        kind: String,
        #[serde(default)]
        message: String,
    },
    Code(String),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

fn remote_error(status: reqwest::StatusCode, body: &str) -> AirtableError {
    let (kind, message) = match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            error: ErrorDetail::Detailed { kind, message },
        }) => (kind, message),
        Ok(ErrorBody {
            error: ErrorDetail::Code(code),
        }) => (code, String::new()),
        Err(_) => (
            status.canonical_reason().unwrap_or("UNKNOWN").to_string(),
            body.trim().to_string(),
        ),
    };

    AirtableError::RemoteError {
        status: status.as_u16(),
        kind,
        message,
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> RecordSource for AirtableClient<C> {
    async fn list_records(&self, query: &ListRecordsQuery) -> Result<Vec<Record>> {
        let url = self.records_url()?;

        let mut params = vec![("maxRecords", query.max_records.to_string())];
        if let Some(view) = &query.view {
            params.push(("view", view.clone()));
        }
        if let Some(formula) = &query.filter_by_formula {
            params.push(("filterByFormula", formula.clone()));
        }

        tracing::debug!("Making API request to: {} {:?}", url, params);
        let response = self
            .client
            .get(url)
            .bearer_auth(self.config.api_key())
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await?;
            return Err(remote_error(status, &body));
        }

        let body = response.bytes().await?;
        let parsed: ListRecordsResponse = serde_json::from_slice(&body)?;
        if parsed.offset.is_some() {
            tracing::debug!("More records available, not following offset");
        }

        Ok(parsed.records)
    }
}
