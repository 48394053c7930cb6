//! The fetch, compute, render pipeline behind the report binary.

use chrono::{Datelike, Local, Month};

use crate::config::ReportConfig;
use crate::domain::{BudgetRow, ReportingPeriod};
use crate::errors::ReportError;
use crate::report::MonthlyReport;
use crate::sheets::{RangeSource, SheetsClient};
use crate::summary::{ChatSummarizer, Summarizer};
use crate::variance::ZeroBudgetPolicy;

const USAGE: &str = "usage: budget_report_cli [--allow-zero-budget] [--no-summary] [<Month> <year>]";

/// Parsed command-line options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    /// Raw period words, e.g. `February 2025`; current month when absent.
    pub period: Option<String>,
    pub allow_zero_budget: bool,
    pub no_summary: bool,
}

impl CliOptions {
    pub fn parse<I>(args: I) -> Result<Self, ReportError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Self::default();
        let mut period_words = Vec::new();
        for arg in args {
            match arg.as_str() {
                "--allow-zero-budget" => options.allow_zero_budget = true,
                "--no-summary" => options.no_summary = true,
                "--help" | "-h" => return Err(ReportError::Usage(USAGE.to_string())),
                flag if flag.starts_with('-') => {
                    return Err(ReportError::Usage(format!(
                        "unknown option `{flag}`\n{USAGE}"
                    )));
                }
                word => period_words.push(word.to_string()),
            }
        }
        if !period_words.is_empty() {
            options.period = Some(period_words.join(" "));
        }
        Ok(options)
    }

    fn policy(&self) -> ZeroBudgetPolicy {
        if self.allow_zero_budget {
            ZeroBudgetPolicy::Exclude
        } else {
            ZeroBudgetPolicy::Error
        }
    }
}

/// Entry point for the binary: loads config, fetches the period's rows,
/// and prints the rendered report.
pub fn run<I>(args: I) -> Result<(), ReportError>
where
    I: IntoIterator<Item = String>,
{
    let options = CliOptions::parse(args)?;
    let config = ReportConfig::from_env()?;
    let period = match &options.period {
        Some(raw) => raw.parse()?,
        None => current_period(),
    };

    let client = SheetsClient::new(&config.spreadsheet_id, &config.api_key);
    let summarizer: Option<Box<dyn Summarizer>> = match (&config.summary, options.no_summary) {
        (Some(summary), false) => Some(Box::new(ChatSummarizer::new(
            &summary.endpoint,
            &summary.api_key,
            &summary.model,
        ))),
        _ => None,
    };

    let report = build_report(
        period,
        &config.cell_suffix,
        options.policy(),
        &client,
        summarizer.as_deref(),
    )?;
    println!("{}", report.render());
    Ok(())
}

/// Fetches, parses, and assembles one month's report. Split from [`run`] so
/// tests can substitute the range source.
pub fn build_report(
    period: ReportingPeriod,
    cell_suffix: &str,
    policy: ZeroBudgetPolicy,
    source: &dyn RangeSource,
    summarizer: Option<&dyn Summarizer>,
) -> Result<MonthlyReport, ReportError> {
    let range = period.range_key(cell_suffix);
    tracing::info!(%period, "building budget report");

    let values = source.fetch_range(&range)?;
    let rows = values
        .iter()
        .map(|cells| BudgetRow::from_cells(cells))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::info!(rows = rows.len(), "fetched budget rows");

    let commentary = match summarizer {
        Some(summarizer) => match summarizer.summarize(&period, &rows) {
            Ok(text) => Some(text),
            Err(err) => {
                tracing::warn!(%err, "summary unavailable, continuing without commentary");
                None
            }
        },
        None => None,
    };

    let report = MonthlyReport::build(period, &rows, policy)?.with_commentary(commentary);
    tracing::info!(
        over = report.partition.over.len(),
        under = report.partition.under.len(),
        "variance computed"
    );
    Ok(report)
}

fn current_period() -> ReportingPeriod {
    let today = Local::now().date_naive();
    let month = Month::try_from(today.month() as u8).unwrap_or(Month::January);
    ReportingPeriod::new(month, today.year())
}
