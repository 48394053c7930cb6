use std::fmt;
use std::str::FromStr;

use chrono::Month;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The month/year key selecting which spreadsheet range a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    pub month: Month,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{0}` is not a valid reporting period, expected `<Month> <year>` (e.g. `February 2025`)")]
pub struct PeriodError(pub String);

impl ReportingPeriod {
    pub fn new(month: Month, year: i32) -> Self {
        Self { month, year }
    }

    /// Combines the period with a configured cell suffix into the range key
    /// the spreadsheet API expects, e.g. `February 2025!A2:C13`.
    pub fn range_key(&self, cell_suffix: &str) -> String {
        format!("{self}{cell_suffix}")
    }
}

impl fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month.name(), self.year)
    }
}

impl FromStr for ReportingPeriod {
    type Err = PeriodError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut parts = input.split_whitespace();
        let (Some(month_part), Some(year_part), None) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(PeriodError(input.to_string()));
        };
        let month =
            Month::from_str(month_part).map_err(|_| PeriodError(input.to_string()))?;
        let year: i32 = year_part
            .parse()
            .map_err(|_| PeriodError(input.to_string()))?;
        Ok(Self { month, year })
    }
}
