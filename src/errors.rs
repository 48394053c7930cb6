use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::period::PeriodError;
use crate::domain::RowError;
use crate::sheets::SheetsError;
use crate::summary::SummaryError;
use crate::variance::VarianceError;

/// Error type that captures common report-run failures.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid reporting period: {0}")]
    Period(#[from] PeriodError),
    #[error("spreadsheet fetch failed: {0}")]
    Sheets(#[from] SheetsError),
    #[error("bad spreadsheet row: {0}")]
    Row(#[from] RowError),
    #[error("variance computation failed: {0}")]
    Variance(#[from] VarianceError),
    #[error("summary failed: {0}")]
    Summary(#[from] SummaryError),
    #[error("{0}")]
    Usage(String),
}
