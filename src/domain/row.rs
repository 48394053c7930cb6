use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::currency::{self, ParseMoneyError};

/// One spreadsheet row: a category with its budgeted and actual spend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRow {
    pub category: String,
    pub budget: f64,
    pub spend: f64,
}

/// Failure to turn a raw spreadsheet row into a [`BudgetRow`].
#[derive(Debug, Clone, Error)]
pub enum RowError {
    #[error("row `{row}` has {got} columns, expected at least 3")]
    MissingColumns { row: String, got: usize },
    #[error(transparent)]
    Money(#[from] ParseMoneyError),
}

impl BudgetRow {
    pub fn new(category: impl Into<String>, budget: f64, spend: f64) -> Self {
        Self {
            category: category.into(),
            budget,
            spend,
        }
    }

    /// Builds a row from raw `[category, budget, spend]` cells. Any parse
    /// failure is fatal for the whole report run; callers must not skip
    /// malformed rows silently.
    pub fn from_cells(cells: &[String]) -> Result<Self, RowError> {
        if cells.len() < 3 {
            return Err(RowError::MissingColumns {
                row: cells.join(", "),
                got: cells.len(),
            });
        }
        Ok(Self {
            category: cells[0].clone(),
            budget: currency::parse_amount(&cells[1])?,
            spend: currency::parse_amount(&cells[2])?,
        })
    }
}

/// Derived over/under figures for a single category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarianceRecord {
    pub category: String,
    pub budget: f64,
    /// `budget - spend`; negative when the category went over budget.
    pub difference: f64,
    /// `difference / budget` as a signed fraction.
    pub percent: f64,
}
