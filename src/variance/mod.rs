//! The variance calculator: partitions a month of budget rows into sorted
//! over-budget and under-budget groups. Pure computation, no I/O, no logging.

use thiserror::Error;

use crate::domain::{BudgetRow, VarianceRecord};

/// What to do with a row whose budget is zero but whose spend is not.
/// Its percentage is undefined, so the row cannot be classified silently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ZeroBudgetPolicy {
    /// Abort the whole computation. The default: a report that quietly
    /// omits a category would mislead the reader.
    #[default]
    Error,
    /// Drop the row from both groups and report it in
    /// [`VariancePartition::skipped`] so the caller can warn.
    Exclude,
}

#[derive(Debug, Clone, Error)]
pub enum VarianceError {
    #[error("category `{category}` has zero budget but nonzero spend; percentage is undefined")]
    DivideByZero { category: String },
}

/// The two disjoint result groups plus any rows excluded by policy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariancePartition {
    /// Rows where spend exceeded budget, most over-budget first.
    pub over: Vec<VarianceRecord>,
    /// Rows with slack left, most under-budget first.
    pub under: Vec<VarianceRecord>,
    /// Categories dropped under [`ZeroBudgetPolicy::Exclude`].
    pub skipped: Vec<String>,
}

/// Computes per-category variance and partitions rows into over/under groups.
///
/// `difference = budget - spend` and `percent = difference / budget` for each
/// row. Rows with `difference == 0` (on budget, including the zero/zero case)
/// belong to neither group and are dropped. The over group is sorted
/// ascending by difference, the under group descending; both sorts are stable
/// so equal differences keep their input order. Running the function twice on
/// the same input yields identical output.
pub fn compute_variance(
    rows: &[BudgetRow],
    policy: ZeroBudgetPolicy,
) -> Result<VariancePartition, VarianceError> {
    let mut partition = VariancePartition::default();

    for row in rows {
        let difference = row.budget - row.spend;
        if difference == 0.0 {
            continue;
        }
        if row.budget == 0.0 {
            match policy {
                ZeroBudgetPolicy::Error => {
                    return Err(VarianceError::DivideByZero {
                        category: row.category.clone(),
                    });
                }
                ZeroBudgetPolicy::Exclude => {
                    partition.skipped.push(row.category.clone());
                    continue;
                }
            }
        }
        let record = VarianceRecord {
            category: row.category.clone(),
            budget: row.budget,
            difference,
            percent: difference / row.budget,
        };
        if difference < 0.0 {
            partition.over.push(record);
        } else {
            partition.under.push(record);
        }
    }

    partition
        .over
        .sort_by(|a, b| a.difference.total_cmp(&b.difference));
    partition
        .under
        .sort_by(|a, b| b.difference.total_cmp(&a.difference));
    Ok(partition)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(category: &str, budget: f64, spend: f64) -> BudgetRow {
        BudgetRow::new(category, budget, spend)
    }

    #[test]
    fn partitions_and_sorts_both_groups() {
        let rows = vec![
            row("Food", 500.0, 550.0),
            row("Fun", 100.0, 40.0),
            row("Transport", 200.0, 320.0),
            row("Utilities", 150.0, 100.0),
        ];
        let partition = compute_variance(&rows, ZeroBudgetPolicy::default()).unwrap();

        let over: Vec<&str> = partition.over.iter().map(|r| r.category.as_str()).collect();
        let under: Vec<&str> = partition
            .under
            .iter()
            .map(|r| r.category.as_str())
            .collect();
        assert_eq!(over, ["Transport", "Food"]);
        assert_eq!(under, ["Fun", "Utilities"]);
    }

    #[test]
    fn on_budget_rows_belong_to_neither_group() {
        let rows = vec![row("Rent", 1000.0, 1000.0), row("Zero", 0.0, 0.0)];
        let partition = compute_variance(&rows, ZeroBudgetPolicy::default()).unwrap();
        assert!(partition.over.is_empty());
        assert!(partition.under.is_empty());
        assert!(partition.skipped.is_empty());
    }

    #[test]
    fn zero_budget_with_spend_errors_by_default() {
        let rows = vec![row("Surprise", 0.0, 25.0)];
        let err = compute_variance(&rows, ZeroBudgetPolicy::Error).unwrap_err();
        assert!(matches!(err, VarianceError::DivideByZero { category } if category == "Surprise"));
    }

    #[test]
    fn zero_budget_rows_can_be_excluded_with_a_record() {
        let rows = vec![row("Surprise", 0.0, 25.0), row("Fun", 100.0, 40.0)];
        let partition = compute_variance(&rows, ZeroBudgetPolicy::Exclude).unwrap();
        assert_eq!(partition.skipped, ["Surprise"]);
        assert_eq!(partition.under.len(), 1);
    }

    #[test]
    fn ties_keep_input_order() {
        let rows = vec![
            row("A", 100.0, 150.0),
            row("B", 200.0, 250.0),
            row("C", 300.0, 350.0),
        ];
        let partition = compute_variance(&rows, ZeroBudgetPolicy::default()).unwrap();
        let over: Vec<&str> = partition.over.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(over, ["A", "B", "C"]);
    }

    #[test]
    fn computation_is_idempotent() {
        let rows = vec![row("Food", 500.0, 550.0), row("Fun", 100.0, 40.0)];
        let first = compute_variance(&rows, ZeroBudgetPolicy::default()).unwrap();
        let second = compute_variance(&rows, ZeroBudgetPolicy::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn negative_spend_counts_as_under_budget() {
        let rows = vec![row("Refunds", 100.0, -20.0)];
        let partition = compute_variance(&rows, ZeroBudgetPolicy::default()).unwrap();
        assert_eq!(partition.under.len(), 1);
        assert_eq!(partition.under[0].difference, 120.0);
    }
}
