//! Spreadsheet values fetch. The report pipeline only needs "give me the
//! raw cells for this range", expressed by [`RangeSource`]; the HTTP client
//! against the Sheets values API is one implementation of it.

use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com";

/// Typed fetch failures, distinguishing "no such range" from transport
/// trouble from a response we could not make sense of.
#[derive(Debug, Error)]
pub enum SheetsError {
    #[error("range `{range}` does not exist or was spelled incorrectly")]
    NoSuchRange { range: String },
    #[error("transport failure talking to the spreadsheet API: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed spreadsheet response: {0}")]
    Malformed(String),
}

/// Supplies the raw string cells for a reporting-period range.
pub trait RangeSource {
    fn fetch_range(&self, range: &str) -> Result<Vec<Vec<String>>, SheetsError>;
}

/// The values-API response body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default)]
    pub major_dimension: Option<String>,
    /// Absent when the range holds no data; treated as an empty sheet.
    #[serde(default)]
    pub values: Option<Vec<Vec<String>>>,
}

/// Read-only client for the spreadsheet values endpoint, authenticated with
/// an API key query parameter.
pub struct SheetsClient {
    http: Client,
    base_url: String,
    spreadsheet_id: String,
    api_key: String,
}

impl SheetsClient {
    pub fn new(spreadsheet_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, spreadsheet_id, api_key)
    }

    pub fn with_base_url(
        base_url: impl Into<String>,
        spreadsheet_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            spreadsheet_id: spreadsheet_id.into(),
            api_key: api_key.into(),
        }
    }

    /// Builds the values URL for a range, percent-encoding the range segment
    /// (range keys contain spaces and `!`).
    fn values_url(&self, range: &str) -> Result<Url, SheetsError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|err| SheetsError::Malformed(format!("invalid base url: {err}")))?;
        url.path_segments_mut()
            .map_err(|_| SheetsError::Malformed("base url cannot carry a path".into()))?
            .extend([
                "v4",
                "spreadsheets",
                self.spreadsheet_id.as_str(),
                "values",
                range,
            ]);
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }
}

impl RangeSource for SheetsClient {
    fn fetch_range(&self, range: &str) -> Result<Vec<Vec<String>>, SheetsError> {
        let url = self.values_url(range)?;
        tracing::debug!(%range, "fetching spreadsheet range");

        let response = self.http.get(url).send()?;
        let status = response.status();
        if status == StatusCode::BAD_REQUEST || status == StatusCode::NOT_FOUND {
            return Err(SheetsError::NoSuchRange {
                range: range.to_string(),
            });
        }
        if !status.is_success() {
            return Err(SheetsError::Malformed(format!(
                "unexpected status {status} from the values endpoint"
            )));
        }

        let body = response.text()?;
        let value_range: ValueRange = serde_json::from_str(&body)
            .map_err(|err| SheetsError::Malformed(err.to_string()))?;
        Ok(value_range.values.unwrap_or_default())
    }
}
