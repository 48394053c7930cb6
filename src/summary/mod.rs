//! Optional narrative commentary for a report, produced by a
//! chat-completions endpoint. The model's output is treated as opaque text;
//! a failed summary degrades the report, it never fails it.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{BudgetRow, ReportingPeriod};

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("transport failure talking to the summary endpoint: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed summary response: {0}")]
    Malformed(String),
}

/// Turns the month's raw rows into free-text commentary.
pub trait Summarizer {
    fn summarize(
        &self,
        period: &ReportingPeriod,
        rows: &[BudgetRow],
    ) -> Result<String, SummaryError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// Summarizer backed by an OpenAI-compatible chat-completions endpoint.
pub struct ChatSummarizer {
    http: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl ChatSummarizer {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    fn prompt(period: &ReportingPeriod, rows: &[BudgetRow]) -> String {
        let mut prompt = format!(
            "Write a short plain-text summary of this {period} personal budget. \
             Each line is `category: budgeted, spent`.\n"
        );
        for row in rows {
            prompt.push_str(&format!(
                "{}: {:.2}, {:.2}\n",
                row.category, row.budget, row.spend
            ));
        }
        prompt
    }
}

impl Summarizer for ChatSummarizer {
    fn summarize(
        &self,
        period: &ReportingPeriod,
        rows: &[BudgetRow],
    ) -> Result<String, SummaryError> {
        let prompt = Self::prompt(period, rows);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(SummaryError::Malformed(format!(
                "unexpected status {status} from the summary endpoint"
            )));
        }

        let body: ChatResponse = response
            .json()
            .map_err(|err| SummaryError::Malformed(err.to_string()))?;
        let content = body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| SummaryError::Malformed("response carried no choices".into()))?;
        Ok(content.trim().to_string())
    }
}
