use crate::currency;
use crate::domain::BudgetRow;

/// One slice of the spend-proportion chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    /// Display label, e.g. `Food ($550.00)`.
    pub label: String,
    pub spend: f64,
    /// This category's share of total charted spend, a fraction in `(0, 1]`.
    pub share: f64,
}

/// Filters to rows eligible for the proportion chart: strictly positive
/// spend. A zero-spend category contributes nothing to a pie chart but may
/// still appear in the variance tables.
pub fn select_chartable_rows(rows: &[BudgetRow]) -> Vec<&BudgetRow> {
    rows.iter().filter(|row| row.spend > 0.0).collect()
}

/// Builds the chart data: one labelled slice per chartable row, with each
/// slice's share of the charted total.
pub fn chart_slices(rows: &[BudgetRow]) -> Vec<ChartSlice> {
    let chartable = select_chartable_rows(rows);
    let total: f64 = chartable.iter().map(|row| row.spend).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    chartable
        .into_iter()
        .map(|row| ChartSlice {
            label: format!("{} ({})", row.category, currency::format_amount(row.spend)),
            spend: row.spend,
            share: row.spend / total,
        })
        .collect()
}
