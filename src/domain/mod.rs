pub mod period;
pub mod row;

pub use period::ReportingPeriod;
pub use row::{BudgetRow, RowError, VarianceRecord};
