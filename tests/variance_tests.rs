use budget_report::domain::BudgetRow;
use budget_report::report::{select_chartable_rows, variance_table, TABLE_HEADER};
use budget_report::variance::{compute_variance, VarianceError, ZeroBudgetPolicy};

fn row(category: &str, budget: &str, spend: &str) -> BudgetRow {
    BudgetRow::from_cells(&[category.to_string(), budget.to_string(), spend.to_string()])
        .expect("valid row")
}

#[test]
fn groups_partition_the_nonzero_difference_rows() {
    let rows = vec![
        row("Food", "$500.00", "$550.00"),
        row("Rent", "$1,000.00", "$1,000.00"),
        row("Fun", "$100.00", "$40.00"),
        row("Gas", "$80.00", "$95.00"),
        row("Gym", "$30.00", "$25.00"),
    ];
    let partition = compute_variance(&rows, ZeroBudgetPolicy::default()).expect("computes");

    let mut seen: Vec<&str> = partition
        .over
        .iter()
        .chain(partition.under.iter())
        .map(|record| record.category.as_str())
        .collect();
    seen.sort_unstable();
    assert_eq!(seen, ["Food", "Fun", "Gas", "Gym"]);
}

#[test]
fn over_ascending_under_descending() {
    let rows = vec![
        row("A", "$100.00", "$130.00"),
        row("B", "$100.00", "$180.00"),
        row("C", "$100.00", "$10.00"),
        row("D", "$100.00", "$60.00"),
    ];
    let partition = compute_variance(&rows, ZeroBudgetPolicy::default()).expect("computes");

    let over: Vec<f64> = partition.over.iter().map(|r| r.difference).collect();
    let under: Vec<f64> = partition.under.iter().map(|r| r.difference).collect();
    assert_eq!(over, [-80.0, -30.0]);
    assert_eq!(under, [90.0, 40.0]);
}

#[test]
fn equal_differences_preserve_input_order() {
    let rows = vec![
        row("First", "$200.00", "$250.00"),
        row("Second", "$900.00", "$950.00"),
        row("Third", "$50.00", "$100.00"),
    ];
    let partition = compute_variance(&rows, ZeroBudgetPolicy::default()).expect("computes");
    let over: Vec<&str> = partition.over.iter().map(|r| r.category.as_str()).collect();
    assert_eq!(over, ["First", "Second", "Third"]);
}

#[test]
fn running_twice_yields_identical_output() {
    let rows = vec![
        row("Food", "$500.00", "$550.00"),
        row("Fun", "$100.00", "$40.00"),
    ];
    assert_eq!(
        compute_variance(&rows, ZeroBudgetPolicy::default()).expect("first"),
        compute_variance(&rows, ZeroBudgetPolicy::default()).expect("second"),
    );
}

#[test]
fn zero_budget_zero_spend_is_simply_excluded() {
    let rows = vec![row("Idle", "$0.00", "$0.00")];
    let partition = compute_variance(&rows, ZeroBudgetPolicy::Error).expect("computes");
    assert!(partition.over.is_empty());
    assert!(partition.under.is_empty());
}

#[test]
fn zero_budget_nonzero_spend_raises_divide_by_zero() {
    let rows = vec![row("Surprise", "$0.00", "$12.00")];
    let err = compute_variance(&rows, ZeroBudgetPolicy::Error).expect_err("must fail");
    assert!(matches!(err, VarianceError::DivideByZero { .. }));
}

#[test]
fn worked_example_matches_expected_tables() {
    let rows = vec![
        row("Food", "$500.00", "$550.00"),
        row("Rent", "$1000.00", "$1000.00"),
        row("Fun", "$100.00", "$40.00"),
    ];
    let partition = compute_variance(&rows, ZeroBudgetPolicy::default()).expect("computes");

    let over = variance_table("Over budget", &partition.over);
    let headers: Vec<&str> = over.columns.iter().map(|c| c.header.as_str()).collect();
    assert_eq!(headers, TABLE_HEADER);
    assert_eq!(over.rows.len(), 1);
    assert_eq!(over.rows[0].cells, ["Food", "$500.00", "-$50.00", "-10.00%"]);

    let under = variance_table("Under budget", &partition.under);
    assert_eq!(under.rows.len(), 1);
    assert_eq!(under.rows[0].cells, ["Fun", "$100.00", "$60.00", "60.00%"]);
}

#[test]
fn chartable_rows_require_positive_spend() {
    let rows = vec![row("A", "$10", "$0"), row("B", "$10", "$5")];
    let chartable = select_chartable_rows(&rows);
    assert_eq!(chartable.len(), 1);
    assert_eq!(chartable[0].category, "B");
}
