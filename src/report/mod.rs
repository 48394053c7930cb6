//! Report assembly: variance tables, chart data, and optional commentary
//! for one reporting period.

pub mod chart;
pub mod table;

pub use chart::{chart_slices, select_chartable_rows, ChartSlice};
pub use table::{Table, TableColumn, TableRenderer};

use crate::currency;
use crate::domain::{BudgetRow, ReportingPeriod, VarianceRecord};
use crate::variance::{compute_variance, VarianceError, VariancePartition, ZeroBudgetPolicy};

/// Fixed column order for both variance tables.
pub const TABLE_HEADER: [&str; 4] = ["Category", "Budget", "Over/Under", "Percent"];

/// Everything the renderer needs for one month.
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    pub period: ReportingPeriod,
    pub partition: VariancePartition,
    pub slices: Vec<ChartSlice>,
    pub commentary: Option<String>,
}

impl MonthlyReport {
    /// Runs the variance calculator and chart selection over the month's
    /// rows. Commentary starts empty; attach it with [`Self::with_commentary`].
    pub fn build(
        period: ReportingPeriod,
        rows: &[BudgetRow],
        policy: ZeroBudgetPolicy,
    ) -> Result<Self, VarianceError> {
        let partition = compute_variance(rows, policy)?;
        let slices = chart_slices(rows);
        Ok(Self {
            period,
            partition,
            slices,
            commentary: None,
        })
    }

    pub fn with_commentary(mut self, commentary: Option<String>) -> Self {
        self.commentary = commentary;
        self
    }

    /// Renders the report as plain text: the two variance tables, the
    /// chart data, and commentary when present.
    pub fn render(&self) -> String {
        let mut out = format!("Budget report for {}\n\n", self.period);

        out.push_str(&render_group("Over budget", &self.partition.over));
        out.push('\n');
        out.push_str(&render_group("Under budget", &self.partition.under));

        if !self.partition.skipped.is_empty() {
            out.push('\n');
            for category in &self.partition.skipped {
                out.push_str(&format!(
                    "Note: `{category}` has zero budget and was left out of the tables.\n"
                ));
            }
        }

        if !self.slices.is_empty() {
            out.push_str("\nSpend by category\n");
            for slice in &self.slices {
                out.push_str(&format!(
                    "  {} {}\n",
                    slice.label,
                    currency::format_percent(slice.share)
                ));
            }
        }

        if let Some(commentary) = &self.commentary {
            out.push_str("\nCommentary\n");
            out.push_str(commentary);
            out.push('\n');
        }
        out
    }
}

/// Builds one variance table with the fixed header row.
pub fn variance_table(title: &str, records: &[VarianceRecord]) -> Table {
    let columns = TABLE_HEADER
        .iter()
        .map(|header| TableColumn::new(*header, header.len()))
        .collect();
    let mut table = Table::new(Some(title), columns);
    for record in records {
        table.add_row(vec![
            record.category.clone(),
            currency::format_amount(record.budget),
            currency::format_amount(record.difference),
            currency::format_percent(record.percent),
        ]);
    }
    table.fit_columns();
    table
}

fn render_group(title: &str, records: &[VarianceRecord]) -> String {
    if records.is_empty() {
        return format!("{title}\n  (no categories)\n");
    }
    TableRenderer::render(&variance_table(title, records))
}
